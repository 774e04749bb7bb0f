//! API route configuration.

use crate::api::handlers::movie_by_id_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Versioned API routes, nested under `/v1`.
///
/// # Endpoints
///
/// - `GET /movies/{id}` - Movie info merged with its reviews
pub fn v1_routes() -> Router<AppState> {
    Router::new().route("/movies/{id}", get(movie_by_id_handler))
}
