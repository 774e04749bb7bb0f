//! Infrastructure layer for external integrations.
//!
//! This layer implements the client ports defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest clients for the movie-info and review stores

pub mod http;
