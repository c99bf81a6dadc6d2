//! HTTP middleware components.
//!
//! These layers only decorate responses or answer CORS preflights; no
//! request is ever rejected.

/// CORS, hardening and content-type response headers
pub mod headers;
