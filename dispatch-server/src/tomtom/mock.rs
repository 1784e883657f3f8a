//! Mock routing client for development and testing without API access.
//!
//! Estimates travel times from great-circle distance at an assumed
//! driving speed, and returns straight-line geometry between waypoints.
//! Less accurate than the live service (it ignores roads) but
//! deterministic and always available.

use async_trait::async_trait;

use crate::domain::{GeoPoint, RouteGeometry};
use crate::planner::{RouteSource, ServiceError, TravelTimeSource};

/// Average driving speed assumption for time estimation.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Deterministic stand-in for the live routing service.
///
/// Mimics the `TomTomClient` surface: origin-relative travel times
/// paired by index, and route geometry through the waypoint list.
#[derive(Debug, Clone)]
pub struct MockRoutingClient {
    /// Assumed average driving speed in km/h.
    pub speed_kmh: f64,
}

impl Default for MockRoutingClient {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl MockRoutingClient {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Great-circle distance between two points in kilometers.
    fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
        let lat1_rad = from.latitude().to_radians();
        let lat2_rad = to.latitude().to_radians();
        let delta_lat = (to.latitude() - from.latitude()).to_radians();
        let delta_lon = (to.longitude() - from.longitude()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_KM * c
    }

    /// Convert distance in km to travel time in seconds.
    fn km_to_seconds(&self, km: f64) -> f64 {
        km / self.speed_kmh * 3600.0
    }
}

#[async_trait]
impl TravelTimeSource for MockRoutingClient {
    async fn travel_times(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Result<Vec<f64>, ServiceError> {
        Ok(destinations
            .iter()
            .map(|&d| self.km_to_seconds(Self::haversine_km(origin, d)))
            .collect())
    }
}

#[async_trait]
impl RouteSource for MockRoutingClient {
    async fn route(&self, waypoints: &[GeoPoint]) -> Result<RouteGeometry, ServiceError> {
        Ok(RouteGeometry::new(waypoints.to_vec()))
    }
}
