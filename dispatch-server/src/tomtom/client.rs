//! TomTom routing API client.
//!
//! Wraps the two endpoints the planner needs: the synchronous matrix
//! endpoint for origin-relative travel times, and calculateRoute for
//! road geometry through an ordered waypoint list. Travel times come
//! back paired by submitted index order; every invocation is a full
//! query against current state, never served from a cache.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::domain::{GeoPoint, RouteGeometry};
use crate::planner::{RouteSource, ServiceError, TravelTimeSource};

use super::error::TomTomError;
use super::types::{MatrixCell, MatrixRequest, MatrixResponse, PointParam, RouteResponse};

/// Default base URL for the TomTom routing APIs.
const DEFAULT_BASE_URL: &str = "https://api.tomtom.com";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the TomTom client.
#[derive(Debug, Clone)]
pub struct TomTomConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production TomTom)
    pub base_url: String,
    /// Routing profile sent as `travelMode`
    pub travel_mode: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TomTomConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            travel_mode: "car".to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the routing profile (e.g. "car", "truck", "pedestrian").
    pub fn with_travel_mode(mut self, mode: impl Into<String>) -> Self {
        self.travel_mode = mode.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TomTom routing API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate
/// limiting.
#[derive(Debug, Clone)]
pub struct TomTomClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    travel_mode: String,
    semaphore: Arc<Semaphore>,
}

impl TomTomClient {
    /// Create a new client with the given configuration.
    pub fn new(config: TomTomConfig) -> Result<Self, TomTomError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            travel_mode: config.travel_mode,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Travel time in seconds from `origin` to each destination, paired
    /// by index with the order submitted.
    ///
    /// An empty destination list returns immediately without a request;
    /// the matrix endpoint rejects empty dimensions.
    pub async fn matrix(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Result<Vec<f64>, TomTomError> {
        if destinations.is_empty() {
            return Ok(Vec::new());
        }

        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TomTomError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/routing/1/matrix/sync/json", self.base_url);
        let request = MatrixRequest {
            origins: vec![origin.into()],
            destinations: destinations.iter().copied().map(PointParam::from).collect(),
        };

        let response = self
            .http
            .post(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("travelMode", self.travel_mode.as_str()),
            ])
            .json(&request)
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: MatrixResponse =
            serde_json::from_str(&body).map_err(|e| TomTomError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        extract_times(parsed, destinations.len())
    }

    /// Road geometry through `waypoints` in the order given.
    ///
    /// The planner only calls this with an origin plus at least one
    /// destination; the API rejects shorter lists.
    pub async fn calculate_route(
        &self,
        waypoints: &[GeoPoint],
    ) -> Result<RouteGeometry, TomTomError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| TomTomError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let locations = waypoints
            .iter()
            .map(|p| format!("{},{}", p.latitude(), p.longitude()))
            .collect::<Vec<_>>()
            .join(":");

        let url = format!("{}/routing/1/calculateRoute/{}/json", self.base_url, locations);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("travelMode", self.travel_mode.as_str()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: RouteResponse =
            serde_json::from_str(&body).map_err(|e| TomTomError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        into_geometry(parsed)
    }
}

/// Map error statuses; return the body text on success.
async fn check_status(response: reqwest::Response) -> Result<String, TomTomError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(TomTomError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TomTomError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TomTomError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

/// Pull per-destination times out of the single matrix row.
fn extract_times(response: MatrixResponse, expected: usize) -> Result<Vec<f64>, TomTomError> {
    let row = response
        .matrix
        .into_iter()
        .next()
        .ok_or_else(|| TomTomError::Json {
            message: "empty matrix in response".to_string(),
            body: None,
        })?;

    if row.len() != expected {
        return Err(TomTomError::Json {
            message: format!("matrix row has {} cells, expected {}", row.len(), expected),
            body: None,
        });
    }

    let mut times = Vec::with_capacity(row.len());
    for (index, cell) in row.into_iter().enumerate() {
        times.push(cell_time(index, cell)?);
    }
    Ok(times)
}

fn cell_time(index: usize, cell: MatrixCell) -> Result<f64, TomTomError> {
    if cell.status_code != 200 {
        return Err(TomTomError::Matrix {
            index,
            message: format!("status {}", cell.status_code),
        });
    }

    let response = cell.response.ok_or_else(|| TomTomError::Matrix {
        index,
        message: "missing route summary".to_string(),
    })?;

    let value = response.route_summary.travel_time_in_seconds;
    if !value.is_finite() || value < 0.0 {
        return Err(TomTomError::Matrix {
            index,
            message: format!("unusable travel time {value}"),
        });
    }

    Ok(value)
}

/// Flatten the first route's legs into a single geometry.
fn into_geometry(response: RouteResponse) -> Result<RouteGeometry, TomTomError> {
    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| TomTomError::Json {
            message: "no routes in response".to_string(),
            body: None,
        })?;

    let mut points = Vec::new();
    for leg in route.legs {
        for p in leg.points {
            let point = GeoPoint::new(p.latitude, p.longitude).map_err(|e| TomTomError::Json {
                message: format!("bad point in route geometry: {e}"),
                body: None,
            })?;
            points.push(point);
        }
    }

    Ok(RouteGeometry::new(points))
}

#[async_trait]
impl TravelTimeSource for TomTomClient {
    async fn travel_times(
        &self,
        origin: GeoPoint,
        destinations: &[GeoPoint],
    ) -> Result<Vec<f64>, ServiceError> {
        self.matrix(origin, destinations)
            .await
            .map_err(ServiceError::from)
    }
}

#[async_trait]
impl RouteSource for TomTomClient {
    async fn route(&self, waypoints: &[GeoPoint]) -> Result<RouteGeometry, ServiceError> {
        self.calculate_route(waypoints)
            .await
            .map_err(ServiceError::from)
    }
}
