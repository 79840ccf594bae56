//! Climate Observation API Server
//!
//! Read-only REST API over the weather station and daily measurement tables.

use std::sync::Arc;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod config;
mod error;
mod routes;
mod stats;

pub use error::ApiError;
pub use stats::TemperatureSummary;

use crate::config::ApiConfig;
use storage::Repository;

/// Application state shared across handlers
pub struct AppState {
    /// Storage repository; the pool is read-safe, so plain `Arc` sharing
    /// suffices — no request mutates it.
    pub repository: Repository,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(
            "/api/v1.0/precipitation",
            get(routes::precipitation::get_precipitation),
        )
        .route("/api/v1.0/stations", get(routes::stations::get_stations))
        .route("/api/v1.0/tobs", get(routes::temperature::get_tobs))
        .route("/api/v1.0/dates", get(dates_handler))
        // Static segments above take priority over the date captures.
        .route("/api/v1.0/:start", get(routes::temperature::get_range_open))
        .route(
            "/api/v1.0/:start/:end",
            get(routes::temperature::get_range_closed),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Landing page listing the available routes
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../templates/index.html"))
}

/// Usage hint for the date-range routes
async fn dates_handler() -> &'static str {
    "Include start date with optional end date to be included after another slash. \
     Example: 2016-08-24/2016-08-31"
}

/// Initialize logging
pub fn init_logging(level: &str) {
    let max_level = level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Run the server
pub async fn run_server(config: &ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let repository = Repository::connect(&config.database.url).await?;
    let state = Arc::new(AppState { repository });
    let app = create_router(state);

    info!("Starting API server on {}", config.server.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
