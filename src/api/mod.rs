//! Popdash REST API
//!
//! HTTP API layer for the population dashboard, built with Axum. Every
//! endpoint derives its response from the shared read-only dataset.
//!
//! # Endpoints
//!
//! ## Catalog
//! - `GET /api/v1/years` - Selectable years, newest first
//! - `GET /api/v1/themes` - Selectable color themes
//! - `GET /api/v1/format?value=n` - Compact number formatting
//!
//! ## Dashboard
//! - `GET /api/v1/dashboard?year&theme` - All panels for a selection
//! - `GET /api/v1/changes/:year` - Highest/lowest growth metrics
//! - `GET /api/v1/map/:year?theme` - Choropleth data
//! - `GET /api/v1/heatmap?theme` - Population by year and region
//!
//! ## Rankings
//! - `GET /api/v1/differences/:year?limit` - Regions ranked by change
//! - `GET /api/v1/population/:year?format=json|csv` - Regions ranked by population
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use popdash::api::{serve, AppState};
//! use popdash::config::Config;
//! use popdash::dataset::load_dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let dataset = Arc::new(load_dataset(&config.data.path)?);
//!
//!     let state = AppState::new(dataset, config.dashboard, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{http::HeaderValue, routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Catalog routes
        .route("/years", get(routes::catalog::list_years))
        .route("/themes", get(routes::catalog::list_themes))
        .route("/format", get(routes::catalog::format_number))
        // Dashboard routes
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/changes/:year", get(routes::dashboard::get_changes))
        .route("/map/:year", get(routes::dashboard::get_map))
        .route("/heatmap", get(routes::dashboard::get_heatmap))
        // Ranking routes
        .route("/differences/:year", get(routes::differences::get_differences))
        .route("/population/:year", get(routes::population::get_population));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config);
    let static_dir = state.config.static_dir.clone();

    // Create shared state
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(routes::not_found),
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS policy: any origin unless origins are configured
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Popdash API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Popdash API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
