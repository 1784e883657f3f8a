//! Route geometry as decoded coordinates.

use serde_json::{Value, json};

use super::GeoPoint;

/// A routed path as an ordered sequence of decoded points.
///
/// Points are stored directly; the compact encodings some routing
/// services use are handled at the wire boundary, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteGeometry {
    points: Vec<GeoPoint>,
}

impl RouteGeometry {
    /// Create a geometry from decoded points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// The path's points in order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consume the geometry and return the owned points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// GeoJSON Feature with a LineString geometry, coordinates in
    /// `[longitude, latitude]` order as line-rendering layers expect.
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<Value> = self
            .points
            .iter()
            .map(|p| json!([p.longitude(), p.latitude()]))
            .collect();

        json!({
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn points_roundtrip() {
        let pts = vec![point(38.5, -120.2), point(40.7, -120.95)];
        let geometry = RouteGeometry::new(pts.clone());
        assert_eq!(geometry.points(), &pts[..]);
        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.into_points(), pts);
    }

    #[test]
    fn empty_geometry() {
        let geometry = RouteGeometry::new(vec![]);
        assert!(geometry.is_empty());
        assert!(
            geometry.to_geojson()["geometry"]["coordinates"]
                .as_array()
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn geojson_is_longitude_first() {
        let geometry = RouteGeometry::new(vec![point(45.5, -73.6)]);
        let value = geometry.to_geojson();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"][0][0], -73.6);
        assert_eq!(value["geometry"]["coordinates"][0][1], 45.5);
    }
}
