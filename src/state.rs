use std::sync::Arc;

use crate::application::services::MovieService;

/// Shared state injected into every handler.
///
/// Holds only read-only, per-process services; requests never share mutable
/// data through it.
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService>,
}

impl AppState {
    pub fn new(movie_service: Arc<MovieService>) -> Self {
        Self { movie_service }
    }
}
