//! Business logic services.
//!
//! Services hold the logic behind the HTTP handlers so it can be tested
//! without a router.

pub mod projection;
