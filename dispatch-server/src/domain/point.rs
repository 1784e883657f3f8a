//! Geographic point value type.

use std::fmt;

/// Error returned when constructing a point from invalid coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate: {reason}")]
pub struct InvalidCoordinate {
    reason: &'static str,
}

/// A geographic point in WGS84 latitude/longitude.
///
/// Construction validates that both components are finite and in range,
/// so code that receives a `GeoPoint` can trust its validity.
///
/// Two points may carry equal coordinates and still be distinct stops;
/// the planner identifies destinations by insertion order, not value.
///
/// # Examples
///
/// ```
/// use dispatch_server::domain::GeoPoint;
///
/// let origin = GeoPoint::new(45.5049, -73.6130).unwrap();
/// assert_eq!(origin.latitude(), 45.5049);
///
/// // Out-of-range latitude is rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Construct a point, validating both coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(InvalidCoordinate {
                reason: "coordinates must be finite",
            });
        }

        if latitude.abs() > 90.0 {
            return Err(InvalidCoordinate {
                reason: "latitude must be within [-90, 90]",
            });
        }

        if longitude.abs() > 180.0 {
            return Err(InvalidCoordinate {
                reason: "longitude must be within [-180, 180]",
            });
        }

        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
