//! TomTom routing service client.
//!
//! HTTP client for the two TomTom endpoints the planner consumes:
//!
//! - the synchronous matrix endpoint, returning origin-relative travel
//!   times paired by submitted index order
//! - calculateRoute, returning road geometry for an ordered waypoint
//!   list
//!
//! Also provides an offline mock with the same surface, for development
//! and testing without API credentials.

mod client;
mod error;
mod mock;
mod types;

pub use client::{TomTomClient, TomTomConfig};
pub use error::TomTomError;
pub use mock::MockRoutingClient;
