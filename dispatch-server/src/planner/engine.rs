//! Route planner orchestration.
//!
//! Owns the waypoint state and recomputes the visiting order and route
//! geometry on every mutation. Each recomputation is a single async
//! pipeline (travel times -> sequencing -> route fetch) tagged with the
//! generation of the state it read; a completion whose generation is no
//! longer current is discarded silently, so a slow pipeline can never
//! overwrite a result computed from fresher state.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, error, trace, warn};

use crate::domain::{DomainError, GeoPoint, PlanResult, WaypointSet};

use super::sequence::sequence;
use super::sources::{RouteSource, ServiceError, TravelTimeSource};

/// Error from a planning cycle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// An external service call failed. The previous plan stays
    /// published; retry policy is the caller's decision.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Sequencing input was inconsistent. A bug in the pairing logic,
    /// not a user-facing condition.
    #[error(transparent)]
    Invariant(#[from] DomainError),
}

/// Where the planner currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlannerPhase {
    /// No destinations; nothing to plan.
    Idle,
    /// A recomputation is in flight.
    Computing,
    /// The published plan matches the current waypoint state.
    Ready,
    /// The latest attempt failed; any earlier plan stays published.
    Failed,
}

/// The planner's published state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSnapshot {
    pub phase: PlannerPhase,
    /// Latest successfully computed plan. Retained through `Failed`,
    /// cleared on `Idle`.
    pub plan: Option<PlanResult>,
    /// Error from the latest attempt, when `phase` is `Failed`.
    pub error: Option<PlanError>,
    /// Generation of the waypoint state this snapshot reflects.
    pub generation: u64,
}

struct PlannerState {
    waypoints: WaypointSet,
    generation: u64,
}

struct PlannerInner {
    travel_times: Arc<dyn TravelTimeSource>,
    routes: Arc<dyn RouteSource>,
    state: Mutex<PlannerState>,
    tx: watch::Sender<PlanSnapshot>,
}

/// Orchestrates recomputation of the visiting order and route geometry.
///
/// Cheap to clone; clones share the same state and publication channel.
#[derive(Clone)]
pub struct RoutePlanner {
    inner: Arc<PlannerInner>,
}

impl RoutePlanner {
    /// Create a planner with the given origin, no destinations, in
    /// [`PlannerPhase::Idle`].
    pub fn new(
        origin: GeoPoint,
        travel_times: Arc<dyn TravelTimeSource>,
        routes: Arc<dyn RouteSource>,
    ) -> Self {
        let (tx, _rx) = watch::channel(PlanSnapshot {
            phase: PlannerPhase::Idle,
            plan: None,
            error: None,
            generation: 0,
        });

        Self {
            inner: Arc::new(PlannerInner {
                travel_times,
                routes,
                state: Mutex::new(PlannerState {
                    waypoints: WaypointSet::new(origin),
                    generation: 0,
                }),
                tx,
            }),
        }
    }

    /// Subscribe to published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<PlanSnapshot> {
        self.inner.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> PlanSnapshot {
        self.inner.tx.borrow().clone()
    }

    /// The current origin.
    pub async fn origin(&self) -> GeoPoint {
        self.inner.state.lock().await.waypoints.origin()
    }

    /// The current destinations in insertion order.
    pub async fn destinations(&self) -> Vec<GeoPoint> {
        self.inner.state.lock().await.waypoints.destinations().to_vec()
    }

    /// Move the origin, superseding any in-flight recomputation.
    pub async fn set_origin(&self, origin: GeoPoint) {
        self.mutate_if(|w| {
            w.set_origin(origin);
            true
        })
        .await;
    }

    /// Append a destination, superseding any in-flight recomputation.
    pub async fn add_destination(&self, destination: GeoPoint) {
        self.mutate_if(|w| {
            w.add_destination(destination);
            true
        })
        .await;
    }

    /// Remove the destination at `index`. Returns false when the index
    /// is out of range; the state is untouched and nothing recomputes.
    pub async fn remove_destination(&self, index: usize) -> bool {
        let mut removed = false;
        self.mutate_if(|w| {
            removed = w.remove_destination(index);
            removed
        })
        .await;
        removed
    }

    /// Apply a mutation; when it reports a change, bump the generation
    /// and start a fresh recomputation against a copied snapshot.
    ///
    /// The state lock is held through publication so snapshots reach the
    /// watch channel in generation order.
    async fn mutate_if(&self, apply: impl FnOnce(&mut WaypointSet) -> bool) {
        let mut state = self.inner.state.lock().await;

        if !apply(&mut state.waypoints) {
            return;
        }

        state.generation += 1;
        let generation = state.generation;
        let (origin, destinations) = state.waypoints.snapshot();

        if destinations.is_empty() {
            // A lone origin is never routed: neither service is called.
            debug!(generation, "no destinations, planner idle");
            self.inner.tx.send_replace(PlanSnapshot {
                phase: PlannerPhase::Idle,
                plan: None,
                error: None,
                generation,
            });
            return;
        }

        debug!(
            generation,
            destinations = destinations.len(),
            "recomputing route"
        );
        self.inner.tx.send_modify(|s| {
            s.phase = PlannerPhase::Computing;
            s.error = None;
            s.generation = generation;
        });

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let result = compute_plan(
                origin,
                &destinations,
                inner.travel_times.as_ref(),
                inner.routes.as_ref(),
            )
            .await;
            inner.finish(generation, result).await;
        });
    }
}

impl PlannerInner {
    /// Apply a completed pipeline, unless a newer mutation superseded it.
    async fn finish(&self, generation: u64, result: Result<PlanResult, PlanError>) {
        // Held through publication, like the mutation path, so a
        // concurrent mutation cannot interleave between the generation
        // check and the send.
        let state = self.state.lock().await;

        if state.generation != generation {
            trace!(
                generation,
                current = state.generation,
                "discarding stale plan"
            );
            return;
        }

        match result {
            Ok(plan) => {
                debug!(generation, stops = plan.ordered_stops.len(), "plan ready");
                self.tx.send_modify(|s| {
                    s.phase = PlannerPhase::Ready;
                    s.plan = Some(plan);
                    s.error = None;
                    s.generation = generation;
                });
            }
            Err(err) => {
                match &err {
                    PlanError::Invariant(e) => {
                        error!(generation, error = %e, "planning invariant violated")
                    }
                    PlanError::Service(e) => {
                        warn!(generation, error = %e, "route recomputation failed")
                    }
                }
                // The previous plan stays published so the last good
                // route remains visible.
                self.tx.send_modify(|s| {
                    s.phase = PlannerPhase::Failed;
                    s.error = Some(err);
                    s.generation = generation;
                });
            }
        }

        drop(state);
    }
}

/// One planning cycle against a state snapshot.
async fn compute_plan(
    origin: GeoPoint,
    destinations: &[GeoPoint],
    travel_times: &dyn TravelTimeSource,
    routes: &dyn RouteSource,
) -> Result<PlanResult, PlanError> {
    let times = travel_times.travel_times(origin, destinations).await?;
    let ordered = sequence(destinations, &times)?;

    let mut stops = Vec::with_capacity(ordered.len() + 1);
    stops.push(origin);
    stops.extend(ordered);

    let geometry = routes.route(&stops).await?;

    Ok(PlanResult {
        ordered_stops: stops,
        geometry,
    })
}
