//! Movie aggregation service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::clients::{MovieInfoClient, ReviewClient, Upstream, UpstreamError};
use crate::domain::entities::{Movie, MovieInfo, Review};
use crate::error::AppError;

/// How the two upstream calls of one request are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Reviews are requested only after the movie info arrived.
    #[default]
    Sequential,
    /// Both calls are in flight together; a movie-info failure drops the
    /// review call.
    Concurrent,
}

/// Reachability of both upstreams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamHealth {
    pub movie_info: bool,
    pub reviews: bool,
}

/// Composes a [`Movie`] from the movie-info and review stores.
///
/// A movie must exist to be addressable, so every movie-info failure
/// (including 404) aborts the request. Zero reviews is a normal state, but a
/// broken review store still fails the request rather than returning a movie
/// with silently dropped reviews.
pub struct MovieService {
    movie_info: Arc<dyn MovieInfoClient>,
    reviews: Arc<dyn ReviewClient>,
    fetch_mode: FetchMode,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(
        movie_info: Arc<dyn MovieInfoClient>,
        reviews: Arc<dyn ReviewClient>,
        fetch_mode: FetchMode,
    ) -> Self {
        Self {
            movie_info,
            reviews,
            fetch_mode,
        }
    }

    /// Retrieves a movie and its reviews by movie id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the movie-info store has no such movie.
    /// Returns the mapped upstream error for any other failure of either store.
    pub async fn get_movie_by_id(&self, id: &str) -> Result<Movie, AppError> {
        let (movie_info, review_list) = match self.fetch_mode {
            FetchMode::Sequential => self.fetch_sequential(id).await?,
            FetchMode::Concurrent => self.fetch_concurrent(id).await?,
        };

        info!(
            movie_id = id,
            reviews = review_list.len(),
            "Movie aggregated"
        );
        Ok(Movie::new(movie_info, review_list))
    }

    /// Probes both upstreams.
    pub async fn upstream_health(&self) -> UpstreamHealth {
        let (movie_info, reviews) =
            tokio::join!(self.movie_info.health_check(), self.reviews.health_check());
        UpstreamHealth {
            movie_info,
            reviews,
        }
    }

    async fn fetch_sequential(&self, id: &str) -> Result<(MovieInfo, Vec<Review>), AppError> {
        let movie_info = record(Upstream::MovieInfo, self.movie_info.fetch(id).await)?;
        let review_list = record(Upstream::Reviews, self.reviews.fetch_by_movie_id(id).await)?;
        Ok((movie_info, review_list))
    }

    async fn fetch_concurrent(&self, id: &str) -> Result<(MovieInfo, Vec<Review>), AppError> {
        let mut info_call = self.movie_info.fetch(id);
        let mut reviews_call = self.reviews.fetch_by_movie_id(id);
        let mut early_reviews = None;

        let info_result = loop {
            tokio::select! {
                result = &mut info_call => break result,
                result = &mut reviews_call, if early_reviews.is_none() => {
                    early_reviews = Some(result);
                }
            }
        };

        // The info outcome decides first; on failure the review call is dropped
        // and whatever it produced is ignored.
        let movie_info = record(Upstream::MovieInfo, info_result)?;

        let reviews_result = match early_reviews {
            Some(result) => result,
            None => reviews_call.await,
        };
        let review_list = record(Upstream::Reviews, reviews_result)?;

        Ok((movie_info, review_list))
    }
}

/// Counts the outcome of one upstream call and maps failures for the caller.
fn record<T>(upstream: Upstream, result: Result<T, UpstreamError>) -> Result<T, AppError> {
    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::counter!(
        "movies_upstream_calls_total",
        "upstream" => upstream.label(),
        "outcome" => outcome
    )
    .increment(1);

    result.map_err(|e| {
        debug!(upstream = upstream.label(), error = %e, "Upstream call failed");
        AppError::from(e)
    })
}
