//! Adapter between the map widget and the planner.
//!
//! The widget itself is an external collaborator; this module defines
//! the narrow surface the planner needs from it (markers plus one named
//! line layer) and translates widget events into planner mutations and
//! published plans into layer updates.

use crate::domain::GeoPoint;
use crate::planner::{PlanSnapshot, PlannerPhase, RoutePlanner};

/// Name of the route overlay layer.
const ROUTE_LAYER: &str = "route";

/// A coordinate-bearing event from the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The user clicked the map: add a destination there.
    Click(GeoPoint),
    /// The user finished dragging the origin marker: move the origin.
    DragEnd(GeoPoint),
}

/// Paint properties for the route layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStyle {
    pub color: String,
    pub width: f64,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "red".to_string(),
            width: 6.0,
        }
    }
}

/// What the planner needs from a map widget.
///
/// Implementations must treat `remove_layer` for an unknown name as a
/// no-op.
pub trait MapSurface {
    /// Place or move the origin marker.
    fn set_origin_marker(&mut self, at: GeoPoint);

    /// Place a marker for a newly added destination.
    fn add_destination_marker(&mut self, at: GeoPoint);

    /// Remove a named layer, if present.
    fn remove_layer(&mut self, name: &str);

    /// Add a named line layer from GeoJSON geometry.
    fn add_route_layer(&mut self, name: &str, geometry: serde_json::Value, style: &RouteStyle);
}

/// Binds a map widget to a planner.
pub struct MapBinding<S: MapSurface> {
    surface: S,
    planner: RoutePlanner,
    style: RouteStyle,
}

impl<S: MapSurface> MapBinding<S> {
    /// Bind a surface to a planner and place the initial origin marker.
    pub async fn new(mut surface: S, planner: RoutePlanner) -> Self {
        surface.set_origin_marker(planner.origin().await);
        Self {
            surface,
            planner,
            style: RouteStyle::default(),
        }
    }

    /// Override the route layer's paint properties.
    pub fn with_style(mut self, style: RouteStyle) -> Self {
        self.style = style;
        self
    }

    /// Forward a widget event into the planner, keeping markers in sync.
    pub async fn handle_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Click(at) => {
                self.surface.add_destination_marker(at);
                self.planner.add_destination(at).await;
            }
            MapEvent::DragEnd(at) => {
                self.surface.set_origin_marker(at);
                self.planner.set_origin(at).await;
            }
        }
    }

    /// Render a published snapshot.
    ///
    /// The route overlay is replaced atomically (remove, then add) when
    /// a plan is ready, removed when the planner goes idle, and left
    /// untouched while computing or after a failure, so the user keeps
    /// seeing the last good route.
    pub fn apply(&mut self, snapshot: &PlanSnapshot) {
        match snapshot.phase {
            PlannerPhase::Ready => {
                if let Some(plan) = &snapshot.plan {
                    self.surface.remove_layer(ROUTE_LAYER);
                    self.surface
                        .add_route_layer(ROUTE_LAYER, plan.geometry.to_geojson(), &self.style);
                }
            }
            PlannerPhase::Idle => {
                self.surface.remove_layer(ROUTE_LAYER);
            }
            PlannerPhase::Computing | PlannerPhase::Failed => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PlanResult, RouteGeometry};
    use crate::tomtom::MockRoutingClient;

    use std::sync::{Arc, Mutex};

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceCall {
        OriginMarker(GeoPoint),
        DestinationMarker(GeoPoint),
        RemoveLayer(String),
        AddLayer(String),
    }

    /// Surface fake that records every call in order.
    #[derive(Clone, Default)]
    struct RecordingSurface {
        calls: Arc<Mutex<Vec<SurfaceCall>>>,
    }

    impl RecordingSurface {
        fn calls(&self) -> Vec<SurfaceCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MapSurface for RecordingSurface {
        fn set_origin_marker(&mut self, at: GeoPoint) {
            self.calls.lock().unwrap().push(SurfaceCall::OriginMarker(at));
        }

        fn add_destination_marker(&mut self, at: GeoPoint) {
            self.calls
                .lock()
                .unwrap()
                .push(SurfaceCall::DestinationMarker(at));
        }

        fn remove_layer(&mut self, name: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(SurfaceCall::RemoveLayer(name.to_string()));
        }

        fn add_route_layer(&mut self, name: &str, _geometry: serde_json::Value, _style: &RouteStyle) {
            self.calls
                .lock()
                .unwrap()
                .push(SurfaceCall::AddLayer(name.to_string()));
        }
    }

    fn planner(origin: GeoPoint) -> RoutePlanner {
        let mock = MockRoutingClient::default();
        RoutePlanner::new(origin, Arc::new(mock.clone()), Arc::new(mock))
    }

    fn ready_snapshot(generation: u64) -> PlanSnapshot {
        let stops = vec![point(45.50, -73.61), point(45.51, -73.60)];
        PlanSnapshot {
            phase: PlannerPhase::Ready,
            plan: Some(PlanResult {
                ordered_stops: stops.clone(),
                geometry: RouteGeometry::new(stops),
            }),
            error: None,
            generation,
        }
    }

    #[tokio::test]
    async fn places_origin_marker_on_bind() {
        let origin = point(45.50, -73.61);
        let surface = RecordingSurface::default();

        MapBinding::new(surface.clone(), planner(origin)).await;

        assert_eq!(surface.calls(), vec![SurfaceCall::OriginMarker(origin)]);
    }

    #[tokio::test]
    async fn click_adds_marker_and_destination() {
        let surface = RecordingSurface::default();
        let planner = planner(point(45.50, -73.61));
        let mut binding = MapBinding::new(surface.clone(), planner.clone()).await;

        let stop = point(45.51, -73.60);
        binding.handle_event(MapEvent::Click(stop)).await;

        assert!(surface.calls().contains(&SurfaceCall::DestinationMarker(stop)));
        assert_eq!(planner.destinations().await, vec![stop]);
    }

    #[tokio::test]
    async fn drag_moves_origin_marker_and_origin() {
        let surface = RecordingSurface::default();
        let planner = planner(point(45.50, -73.61));
        let mut binding = MapBinding::new(surface.clone(), planner.clone()).await;

        let moved = point(45.49, -73.58);
        binding.handle_event(MapEvent::DragEnd(moved)).await;

        assert!(surface.calls().contains(&SurfaceCall::OriginMarker(moved)));
        assert_eq!(planner.origin().await, moved);
    }

    #[tokio::test]
    async fn ready_replaces_layer_atomically() {
        let surface = RecordingSurface::default();
        let mut binding = MapBinding::new(surface.clone(), planner(point(45.50, -73.61))).await;

        binding.apply(&ready_snapshot(1));

        let calls = surface.calls();
        // Remove always precedes add, so the overlay is never doubled.
        assert_eq!(
            &calls[1..],
            &[
                SurfaceCall::RemoveLayer("route".to_string()),
                SurfaceCall::AddLayer("route".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn failure_leaves_drawn_route_alone() {
        let surface = RecordingSurface::default();
        let mut binding = MapBinding::new(surface.clone(), planner(point(45.50, -73.61))).await;

        binding.apply(&ready_snapshot(1));
        let drawn = surface.calls();

        let mut failed = ready_snapshot(2);
        failed.phase = PlannerPhase::Failed;
        binding.apply(&failed);

        assert_eq!(surface.calls(), drawn);
    }

    #[tokio::test]
    async fn idle_removes_layer() {
        let surface = RecordingSurface::default();
        let mut binding = MapBinding::new(surface.clone(), planner(point(45.50, -73.61))).await;

        binding.apply(&ready_snapshot(1));
        binding.apply(&PlanSnapshot {
            phase: PlannerPhase::Idle,
            plan: None,
            error: None,
            generation: 2,
        });

        assert_eq!(
            surface.calls().last(),
            Some(&SurfaceCall::RemoveLayer("route".to_string()))
        );
    }
}
