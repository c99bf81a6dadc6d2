//! Response header layers.
//!
//! Every response leaving the router gets:
//! 1. Permissive CORS headers so browser clients on any origin can read it
//! 2. Basic hardening headers
//! 3. A JSON content type, unless the handler already chose one
//!
//! CORS preflight requests are answered by the CORS layer itself and never
//! reach the router.

use axum::http::{
    HeaderName, HeaderValue, Method,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN, X_FRAME_OPTIONS, X_XSS_PROTECTION},
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

/// Content type used when the handler did not set one.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Create CORS layer with permissive settings.
///
/// Any origin may read responses. Preflights advertise the methods and
/// request headers browser clients of this API send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::OPTIONS, Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            ORIGIN,
            X_REQUESTED_WITH,
            CONTENT_TYPE,
            ACCEPT,
            AUTHORIZATION,
        ])
        .allow_credentials(false)
}

/// `X-XSS-Protection: 1; mode=block`, overwriting any existing value.
pub fn xss_protection_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    )
}

/// `X-Frame-Options: SAMEORIGIN`, overwriting any existing value.
pub fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"))
}

/// JSON content type for responses that do not carry one.
pub fn json_content_type_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    )
}
