//! Port for the review store.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::entities::Review;

/// Typed client for the review store.
///
/// Having no reviews is a normal state, so a 404 from the store is reported
/// as an empty list rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewClient: Send + Sync {
    /// Fetches every review attached to `movie_id`, in store order.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::Client`] for 4xx other than 404
    /// - [`UpstreamError::Server`] for 5xx
    /// - [`UpstreamError::Unavailable`] on connection failure or timeout
    /// - [`UpstreamError::Decode`] when the body is not a review list
    async fn fetch_by_movie_id(&self, movie_id: &str) -> Result<Vec<Review>, UpstreamError>;

    /// Checks whether the store answers HTTP at all.
    async fn health_check(&self) -> bool;
}
