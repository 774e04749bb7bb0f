//! Review entity as served by the review store.

use serde::{Deserialize, Serialize};

/// A single review attached to a movie.
///
/// `movie_info_id` is a foreign key the review store does not enforce, so
/// reviews for movies that no longer exist are possible. The rating is
/// validated upstream and taken as-is here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: Option<String>,
    pub movie_info_id: Option<i64>,
    pub comment: Option<String>,
    pub rating: f64,
}

impl Review {
    /// Creates a new Review instance.
    pub fn new(
        review_id: Option<String>,
        movie_info_id: Option<i64>,
        comment: Option<String>,
        rating: f64,
    ) -> Self {
        Self {
            review_id,
            movie_info_id,
            comment,
            rating,
        }
    }
}
