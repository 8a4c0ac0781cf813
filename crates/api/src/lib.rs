//! HTTP API server for Qibla bearings and Hijri dates.
//!
//! Provides the `/api/*` endpoints, a Prometheus scrape endpoint, and the
//! built frontend bundle, with structured logging (tracing) on every request.

pub mod config;
pub mod error;
pub mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use domain::CalendarConverter;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;

/// Shared application state accessible from all handlers.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub converter: CalendarConverter,
    pub static_dir: PathBuf,
}

impl AppState {
    /// Resolves the Hijri capability and frontend location from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            converter: CalendarConverter::from_flag(config.hijri_enabled),
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Creates the Axum application router with all routes and shared state.
///
/// If the static directory exists it answers every path not matched by an
/// API route; otherwise `/` returns build instructions.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    create_app_with_routes(state, metrics_handle, Router::new())
}

/// Like [`create_app`], with `extra` routes mounted behind the same
/// middleware (panic catching, CORS, tracing).
pub fn create_app_with_routes(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    extra: Router<Arc<AppState>>,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let api = Router::new()
        .route("/api/health", get(routes::health::check))
        .route("/api/qibla", get(routes::qibla::bearing))
        .route("/api/hijri", get(routes::hijri::convert))
        .merge(extra);

    let api = if state.static_dir.is_dir() {
        tracing::info!(dir = %state.static_dir.display(), "serving frontend bundle");
        api.fallback_service(routes::frontend::serve_dir(&state.static_dir))
    } else {
        tracing::warn!(
            dir = %state.static_dir.display(),
            "frontend bundle not found, serving instructions at /"
        );
        api.route("/", get(routes::frontend::root_fallback))
    };

    api.with_state(state)
        .merge(metrics_router)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
