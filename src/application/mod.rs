//! Application layer services implementing the gateway logic.
//!
//! Services consume the client ports from [`crate::domain::clients`] and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::movie_service::MovieService`] - Movie aggregation with partial-failure policy

pub mod services;
