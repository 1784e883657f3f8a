//! Web layer for the dispatch planner.
//!
//! Provides the JSON API the map frontend drives (origin and destination
//! mutations, latest-plan polling) and the page shell hosting the
//! widget.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
