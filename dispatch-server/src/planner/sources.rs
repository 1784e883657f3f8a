//! Seams to the external routing services.
//!
//! The planner depends on these narrow traits rather than on a concrete
//! client, so sequencing and staleness behavior can be tested with
//! deterministic fakes.

use async_trait::async_trait;

use crate::domain::{GeoPoint, RouteGeometry};

/// Error from an external routing service.
///
/// Covers network failures, non-success responses, and responses the
/// client could not interpret. The planner does not retry; it surfaces
/// the failure and leaves retry policy to the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// Request never completed (connection failure, timeout, ...)
    #[error("request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("service returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The service answered, but the response was unusable
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Provides origin-relative travel times.
#[async_trait]
pub trait TravelTimeSource: Send + Sync {
    /// Travel time in seconds from `origin` to each destination, paired
    /// by index with the order submitted regardless of how the service
    /// orders its response.
    ///
    /// An empty destination list returns an empty vec without issuing a
    /// request.
    async fn travel_times(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Result<Vec<f64>, ServiceError>;
}

/// Provides routed geometry through an ordered waypoint list.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// Road geometry connecting `waypoints` in the order given.
    ///
    /// Callers must pass at least two waypoints; the planner never asks
    /// for a route with fewer.
    async fn route(&self, waypoints: &[GeoPoint]) -> Result<RouteGeometry, ServiceError>;
}
