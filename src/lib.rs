//! # Movies Service
//!
//! Gateway that composes a single movie view from two upstream stores: the
//! movie-info store and the review store.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Movie entities and upstream client traits
//! - **Application Layer** ([`application`]) - Aggregation and partial-failure policy
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest clients, retries, status translation
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Failure Policy
//!
//! - Movie info missing → 404, reviews are never requested
//! - Movie info store failing → request fails with the upstream-derived message
//! - Review store answering 404 → movie returned with an empty review list
//! - Review store failing in any other way → request fails
//!
//! ## Quick Start
//!
//! ```bash
//! export MOVIE_INFO_URL="http://localhost:8080/v1/movieinfos"
//! export REVIEWS_URL="http://localhost:8081/v1/reviews"
//!
//! cargo run
//! curl http://localhost:8082/v1/movies/abc
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FetchMode, MovieService};
    pub use crate::domain::clients::{MovieInfoClient, ReviewClient, Upstream, UpstreamError};
    pub use crate::domain::entities::{Movie, MovieInfo, Review};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::{HttpMovieInfoClient, HttpReviewClient, RetryPolicy};
    pub use crate::state::AppState;
}
