//! HTTP request handlers for API endpoints.

pub mod health;
pub mod movies;

pub use health::health_handler;
pub use movies::movie_by_id_handler;
