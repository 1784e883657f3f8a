//! Route sequencing and re-planning.
//!
//! The sequencer orders destinations by origin-relative travel time; the
//! planner drives the recompute pipeline against the external services
//! and keeps the published plan consistent with the latest waypoint
//! state.

mod engine;
mod sequence;
mod sources;

pub use engine::{PlanError, PlanSnapshot, PlannerPhase, RoutePlanner};
pub use sequence::sequence;
pub use sources::{RouteSource, ServiceError, TravelTimeSource};
