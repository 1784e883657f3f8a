//! Plan output types.

use super::{GeoPoint, RouteGeometry};

/// A destination paired with its travel time from the origin.
///
/// Derived during sequencing and discarded afterwards; every planning
/// cycle recomputes these from a fresh oracle query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedDestination {
    pub point: GeoPoint,
    pub travel_time_seconds: f64,
}

/// The published output of a completed planning cycle.
///
/// Replaced wholesale on each recomputation; never patched in place.
/// `ordered_stops[0]` is the origin the plan was computed from, and the
/// remainder is a permutation of the destinations at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// Origin first, then destinations in visiting order.
    pub ordered_stops: Vec<GeoPoint>,
    /// Road geometry through the ordered stops, as delivered by the
    /// router.
    pub geometry: RouteGeometry,
}
