//! Aggregated movie view returned by the gateway.

use serde::{Deserialize, Serialize};

use super::{MovieInfo, Review};

/// One movie together with all of its reviews.
///
/// Built fresh for every request and never persisted. Review order is the
/// order the review store returned them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_info: MovieInfo,
    pub review_list: Vec<Review>,
}

impl Movie {
    /// Creates a new aggregate from an info record and its reviews.
    pub fn new(movie_info: MovieInfo, review_list: Vec<Review>) -> Self {
        Self {
            movie_info,
            review_list,
        }
    }
}
