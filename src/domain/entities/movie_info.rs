//! Movie info entity as served by the movie-info store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Canonical movie record owned by the movie-info store.
///
/// `movie_info_id` is assigned by the store and is always present on records
/// returned from it; it is only absent on records that were never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    pub movie_info_id: Option<String>,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub cast: Vec<String>,
    pub release_date: Option<NaiveDate>,
}

impl MovieInfo {
    /// Creates a new MovieInfo instance.
    pub fn new(
        movie_info_id: Option<String>,
        name: String,
        year: i32,
        cast: Vec<String>,
        release_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            movie_info_id,
            name,
            year,
            cast,
            release_date,
        }
    }
}
