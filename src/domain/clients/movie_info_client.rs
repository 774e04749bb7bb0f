//! Port for the movie-info store.

use async_trait::async_trait;

use super::UpstreamError;
use crate::domain::entities::MovieInfo;

/// Typed client for the movie-info store.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpMovieInfoClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieInfoClient: Send + Sync {
    /// Fetches the movie record for `id`.
    ///
    /// # Errors
    ///
    /// - [`UpstreamError::NotFound`] when the store answers 404
    /// - [`UpstreamError::Client`] for any other 4xx
    /// - [`UpstreamError::Server`] for 5xx
    /// - [`UpstreamError::Unavailable`] on connection failure or timeout
    /// - [`UpstreamError::Decode`] when the body is not a valid record
    async fn fetch(&self, id: &str) -> Result<MovieInfo, UpstreamError>;

    /// Checks whether the store answers HTTP at all.
    async fn health_check(&self) -> bool;
}
