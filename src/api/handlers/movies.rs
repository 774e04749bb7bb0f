//! Handler for the aggregated movie view.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::Movie;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves a movie together with its reviews.
///
/// # Endpoint
///
/// `GET /v1/movies/{id}`
///
/// # Response
///
/// ```json
/// {
///   "movieInfo": {
///     "movieInfoId": "abc",
///     "name": "Batman Begins",
///     "year": 2005,
///     "cast": ["Christian Bale", "Michael Cane"],
///     "releaseDate": "2005-06-15"
///   },
///   "reviewList": [
///     { "reviewId": "1", "movieInfoId": 1, "comment": "Awesome Movie", "rating": 9.0 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Plain-text bodies:
///
/// - **404**: `There is no MovieInfo available for the passed id : {id}`
/// - **4xx**: an upstream rejected the request; its status and body are forwarded
/// - **500**: `Server Exception in MoviesInfoService {body}` or
///   `Server Exception in ReviewsService {body}`
/// - **502**: an upstream returned a body that could not be decoded
/// - **503**: an upstream could not be reached within the timeout and retries
pub async fn movie_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movie_service.get_movie_by_id(&id).await?;
    Ok(Json(movie))
}
