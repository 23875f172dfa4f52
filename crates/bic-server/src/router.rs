use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use bic_registry::Registry;

use crate::handler;

/// Build the axum router with all registry endpoints.
///
/// The registry handle is the router state; tests inject a fresh in-memory
/// store per router.
pub fn build_router(registry: Registry) -> Router {
    build_router_with_body_limit(registry, crate::config::ServerConfig::default().max_body_bytes)
}

/// [`build_router`] with an explicit request body cap.
pub fn build_router_with_body_limit(registry: Registry, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/swift-codes", post(handler::add_swift_code))
        .route(
            "/v1/swift-codes/:code",
            get(handler::get_swift_code).delete(handler::delete_swift_code),
        )
        .route("/v1/swift-codes/country/:iso2", get(handler::get_country))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}
