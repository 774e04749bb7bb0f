//! Core domain entities representing the movie data model.
//!
//! Entities are plain data structures mirroring the JSON contracts of the two
//! upstream stores, so field names serialize in camelCase.
//!
//! # Entity Types
//!
//! - [`MovieInfo`] - Canonical movie record from the movie-info store
//! - [`Review`] - A review from the review store
//! - [`Movie`] - Per-request aggregate of one `MovieInfo` and its reviews

pub mod movie;
pub mod movie_info;
pub mod review;

pub use movie::Movie;
pub use movie_info::MovieInfo;
pub use review::Review;
