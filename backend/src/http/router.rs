//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (auth, CORS, compression, tracing) and
//! creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::auth;
use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Inspections
        .route(
            "/inspections",
            get(handlers::list_inspections).post(handlers::create_inspection),
        )
        .route(
            "/inspections/{id}",
            get(handlers::get_inspection)
                .put(handlers::update_inspection)
                .delete(handlers::delete_inspection),
        )
        // Rigs
        .route("/rigs", get(handlers::list_rigs).post(handlers::create_rig))
        .route(
            "/rigs/{id}",
            get(handlers::get_rig)
                .put(handlers::update_rig)
                .delete(handlers::delete_rig),
        )
        // Inspectors
        .route(
            "/inspectors",
            get(handlers::list_inspectors).post(handlers::create_inspector),
        )
        .route(
            "/inspectors/{id}",
            get(handlers::get_inspector)
                .put(handlers::update_inspector)
                .delete(handlers::delete_inspector),
        )
        // Reports
        .route("/reports", get(handlers::get_report))
        .route("/reports/monthly", get(handlers::get_monthly_stats))
        .route("/reports/rigs", get(handlers::get_rig_performance))
        .route("/reports/severity", get(handlers::get_breakdown))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_token,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
