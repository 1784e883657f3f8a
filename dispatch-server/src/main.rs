use std::net::SocketAddr;
use std::sync::Arc;

use dispatch_server::domain::GeoPoint;
use dispatch_server::planner::{RoutePlanner, RouteSource, TravelTimeSource};
use dispatch_server::tomtom::{MockRoutingClient, TomTomClient, TomTomConfig};
use dispatch_server::web::{AppState, create_router};

/// Default origin: central Montreal, matching the frontend's initial
/// map view.
const DEFAULT_ORIGIN: (f64, f64) = (45.50485816337779, -73.61298294899296);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let origin =
        GeoPoint::new(DEFAULT_ORIGIN.0, DEFAULT_ORIGIN.1).expect("default origin is valid");

    let offline = std::env::var("DISPATCH_OFFLINE").is_ok_and(|v| v == "1");

    let (travel_times, routes): (Arc<dyn TravelTimeSource>, Arc<dyn RouteSource>) = if offline {
        println!("DISPATCH_OFFLINE=1: using the offline haversine client.");
        let mock = MockRoutingClient::default();
        (Arc::new(mock.clone()), Arc::new(mock))
    } else {
        // Get credentials from environment
        let api_key = std::env::var("TOMTOM_API_KEY").unwrap_or_else(|_| {
            eprintln!("Warning: TOMTOM_API_KEY not set. API calls will fail.");
            String::new()
        });

        let mut config = TomTomConfig::new(&api_key);
        if let Ok(base) = std::env::var("TOMTOM_API_BASE") {
            config = config.with_base_url(base);
        }

        let client = TomTomClient::new(config).expect("Failed to create TomTom client");
        (Arc::new(client.clone()), Arc::new(client))
    };

    let planner = RoutePlanner::new(origin, travel_times, routes);
    let state = AppState::new(planner);
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Dispatch planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                  - Health check");
    println!("  GET    /api/plan                - Latest plan");
    println!("  POST   /api/origin              - Move the origin");
    println!("  POST   /api/destinations        - Add a destination");
    println!("  DELETE /api/destinations/:index - Remove a destination");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
