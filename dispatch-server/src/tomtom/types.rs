//! Wire types for the TomTom routing APIs.
//!
//! These mirror the JSON shapes of the synchronous matrix endpoint and
//! calculateRoute. Conversion to domain types happens at this boundary,
//! in the client.

use serde::{Deserialize, Serialize};

use crate::domain::GeoPoint;

/// A coordinate pair in TomTom's wire shape.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeoPoint> for LatLon {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude: p.latitude(),
            longitude: p.longitude(),
        }
    }
}

/// A matrix request entry: `{"point": {"latitude": .., "longitude": ..}}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PointParam {
    pub point: LatLon,
}

impl From<GeoPoint> for PointParam {
    fn from(p: GeoPoint) -> Self {
        Self { point: p.into() }
    }
}

/// Matrix request body: one origin, the destinations in planner order.
#[derive(Debug, Serialize)]
pub struct MatrixRequest {
    pub origins: Vec<PointParam>,
    pub destinations: Vec<PointParam>,
}

/// Matrix response: one row per origin, one cell per destination, both
/// in submitted order.
#[derive(Debug, Deserialize)]
pub struct MatrixResponse {
    pub matrix: Vec<Vec<MatrixCell>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixCell {
    pub status_code: u16,
    pub response: Option<CellResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellResponse {
    pub route_summary: RouteSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub travel_time_in_seconds: f64,
}

/// calculateRoute response.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    pub routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Deserialize)]
pub struct RouteLeg {
    pub points: Vec<LatLon>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_request_shape() {
        let origin = GeoPoint::new(45.5049, -73.6130).unwrap();
        let destination = GeoPoint::new(45.51, -73.60).unwrap();

        let request = MatrixRequest {
            origins: vec![origin.into()],
            destinations: vec![destination.into()],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["origins"][0]["point"]["latitude"], 45.5049);
        assert_eq!(value["origins"][0]["point"]["longitude"], -73.6130);
        assert_eq!(value["destinations"][0]["point"]["latitude"], 45.51);
    }

    #[test]
    fn parses_matrix_response() {
        let body = r#"{
            "formatVersion": "0.0.1",
            "matrix": [[
                {
                    "statusCode": 200,
                    "response": {
                        "routeSummary": {
                            "lengthInMeters": 3610,
                            "travelTimeInSeconds": 300,
                            "trafficDelayInSeconds": 0
                        }
                    }
                },
                {
                    "statusCode": 200,
                    "response": {
                        "routeSummary": {
                            "lengthInMeters": 1822,
                            "travelTimeInSeconds": 120,
                            "trafficDelayInSeconds": 5
                        }
                    }
                }
            ]],
            "summary": {"successfulRoutes": 2, "totalRoutes": 2}
        }"#;

        let parsed: MatrixResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.matrix.len(), 1);

        let row = &parsed.matrix[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].status_code, 200);
        assert_eq!(
            row[0]
                .response
                .as_ref()
                .unwrap()
                .route_summary
                .travel_time_in_seconds,
            300.0
        );
        assert_eq!(
            row[1]
                .response
                .as_ref()
                .unwrap()
                .route_summary
                .travel_time_in_seconds,
            120.0
        );
    }

    #[test]
    fn parses_failed_matrix_cell() {
        let body = r#"{"matrix": [[{"statusCode": 400}]]}"#;

        let parsed: MatrixResponse = serde_json::from_str(body).unwrap();
        let cell = &parsed.matrix[0][0];
        assert_eq!(cell.status_code, 400);
        assert!(cell.response.is_none());
    }

    #[test]
    fn parses_route_response() {
        let body = r#"{
            "formatVersion": "0.0.12",
            "routes": [{
                "summary": {"lengthInMeters": 5000, "travelTimeInSeconds": 420},
                "legs": [
                    {"points": [
                        {"latitude": 45.5049, "longitude": -73.6130},
                        {"latitude": 45.5120, "longitude": -73.6080}
                    ]},
                    {"points": [
                        {"latitude": 45.5120, "longitude": -73.6080},
                        {"latitude": 45.5200, "longitude": -73.6200}
                    ]}
                ]
            }]
        }"#;

        let parsed: RouteResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.routes.len(), 1);
        assert_eq!(parsed.routes[0].legs.len(), 2);
        assert_eq!(parsed.routes[0].legs[0].points[0].latitude, 45.5049);
        assert_eq!(parsed.routes[0].legs[1].points[1].longitude, -73.62);
    }
}
