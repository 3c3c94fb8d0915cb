pub mod config;
pub mod handlers;
pub mod startup;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::cors::browser_cors_middleware;
use tower_http::trace::TraceLayer;

/// Build the service router.
///
/// The CORS middleware is the outermost layer so preflights are answered
/// before routing and every response, 404s included, carries the header set.
pub fn app_router() -> Router {
    Router::new()
        .route("/api/generate", post(handlers::generate::generate_course))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(browser_cors_middleware))
}
