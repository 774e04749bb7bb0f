//! Client trait definitions for the two upstream stores.
//!
//! The gateway never talks to persistence directly; both stores are reached
//! through these ports. Implementations live in
//! `crate::infrastructure::http`, and mock implementations are generated via
//! `mockall` for testing.
//!
//! # Available Clients
//!
//! - [`MovieInfoClient`] - Fetch a movie record by id
//! - [`ReviewClient`] - Fetch all reviews for a movie id

pub mod error;
pub mod movie_info_client;
pub mod review_client;

pub use error::{Upstream, UpstreamError};
pub use movie_info_client::MovieInfoClient;
pub use review_client::ReviewClient;

#[cfg(test)]
pub use movie_info_client::MockMovieInfoClient;
#[cfg(test)]
pub use review_client::MockReviewClient;
