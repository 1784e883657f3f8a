//! Incremental multi-stop route planner.
//!
//! A web application that keeps a driving route through user-placed
//! stops up to date: every time the origin moves or a destination is
//! added, travel times are re-queried, the visiting order is
//! resequenced, and fresh road geometry is fetched and published.

pub mod domain;
pub mod map;
pub mod planner;
pub mod tomtom;
pub mod web;
