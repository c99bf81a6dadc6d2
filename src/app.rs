//! Router construction.
//!
//! The router is built from an explicitly supplied [`UserDirectory`], so
//! `main` and the integration tests assemble the exact same application.

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{directory::UserDirectory, handlers, middleware::headers};

/// Build the HTTP router serving `directory`.
///
/// # Layers
///
/// Outermost first:
/// 1. `TraceLayer` logs each request and response
/// 2. `X-XSS-Protection` and `X-Frame-Options` on every response
/// 3. `CorsLayer` answers preflights and adds `Access-Control-Allow-Origin`
/// 4. JSON content type when the response has none
///
/// All layers wrap the fallbacks too, so 404 and 405 responses carry the
/// same headers as the projections.
pub fn build_router(directory: UserDirectory) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/name", get(handlers::users::list_names))
        .route("/location", get(handlers::users::list_locations))
        .route("/occupation", get(handlers::users::list_occupations))
        .route(
            "/occupation/latest",
            get(handlers::users::list_latest_occupations),
        )
        .route("/hobbies", get(handlers::users::list_hobbies))
        .route("/hobbies/{type}", get(handlers::users::list_hobbies_by_type))
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(headers::xss_protection_layer())
                .layer(headers::frame_options_layer())
                .layer(headers::cors_layer())
                .layer(headers::json_content_type_layer()),
        )
        // Share the directory with all handlers via State extraction
        .with_state(directory)
}
