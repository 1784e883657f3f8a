//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RoutePlanner;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The planner driving all mutations and reads.
    pub planner: Arc<RoutePlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: RoutePlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
