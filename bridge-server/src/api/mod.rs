//! API routes for the bridge server
//!
//! - [`health`] - health check
//! - [`dashboard`] - hourly dashboard report and clocked-in view

pub mod dashboard;
pub mod health;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Handler result: JSON payload or a typed [`shared::error::AppError`]
pub type ApiResult<T> = Result<axum::Json<T>, shared::error::AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/dashboard/clocked-in", get(dashboard::get_clocked_in))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
