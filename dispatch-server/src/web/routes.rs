//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, State},
    response::{Html, IntoResponse},
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::domain::GeoPoint;

use super::dto::{AppError, PlanResponse, PointDto};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the map widget's static assets.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/plan", get(current_plan))
        .route("/api/origin", post(set_origin))
        .route("/api/destinations", post(add_destination))
        .route("/api/destinations/:index", delete(remove_destination))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Page shell hosting the map widget.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Latest published plan.
async fn current_plan(State(state): State<AppState>) -> Json<PlanResponse> {
    Json(PlanResponse::from_snapshot(&state.planner.latest()))
}

fn parse_point(dto: PointDto) -> Result<GeoPoint, AppError> {
    GeoPoint::new(dto.latitude, dto.longitude).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Move the origin; kicks off a recomputation.
async fn set_origin(
    State(state): State<AppState>,
    Json(req): Json<PointDto>,
) -> Result<Json<PlanResponse>, AppError> {
    let origin = parse_point(req)?;
    state.planner.set_origin(origin).await;

    Ok(Json(PlanResponse::from_snapshot(&state.planner.latest())))
}

/// Append a destination; kicks off a recomputation.
async fn add_destination(
    State(state): State<AppState>,
    Json(req): Json<PointDto>,
) -> Result<Json<PlanResponse>, AppError> {
    let destination = parse_point(req)?;
    state.planner.add_destination(destination).await;

    Ok(Json(PlanResponse::from_snapshot(&state.planner.latest())))
}

/// Remove a destination by its insertion index.
async fn remove_destination(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PlanResponse>, AppError> {
    if !state.planner.remove_destination(index).await {
        return Err(AppError::NotFound {
            message: format!("no destination at index {}", index),
        });
    }

    Ok(Json(PlanResponse::from_snapshot(&state.planner.latest())))
}
