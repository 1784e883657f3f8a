//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::GeoPoint;
use crate::planner::{PlanSnapshot, PlannerPhase};

/// A coordinate pair in a request or response body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PointDto {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for PointDto {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude: p.latitude(),
            longitude: p.longitude(),
        }
    }
}

/// The planner's published state, as returned by `GET /api/plan`.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// One of "idle", "computing", "ready", "failed"
    pub phase: &'static str,

    /// Generation of the waypoint state this reflects
    pub generation: u64,

    /// Origin first, then destinations in visiting order
    pub stops: Vec<PointDto>,

    /// GeoJSON feature for the route layer
    pub route: Option<Value>,

    /// Error message from the latest failed attempt
    pub error: Option<String>,
}

impl PlanResponse {
    /// Convert a planner snapshot for the wire.
    pub fn from_snapshot(snapshot: &PlanSnapshot) -> Self {
        let phase = match snapshot.phase {
            PlannerPhase::Idle => "idle",
            PlannerPhase::Computing => "computing",
            PlannerPhase::Ready => "ready",
            PlannerPhase::Failed => "failed",
        };

        let (stops, route) = match &snapshot.plan {
            Some(plan) => (
                plan.ordered_stops.iter().copied().map(PointDto::from).collect(),
                Some(plan.geometry.to_geojson()),
            ),
            None => (Vec::new(), None),
        };

        Self {
            phase,
            generation: snapshot.generation,
            stops,
            route,
            error: snapshot.error.as_ref().map(|e| e.to_string()),
        }
    }
}

/// Web-layer errors rendered as a status code plus a JSON body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
