//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with upstream checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Both upstreams reachable
/// - **503 Service Unavailable**: One or more upstreams unreachable
///
/// # Components Checked
///
/// 1. **Movie info**: Any HTTP answer from the movie-info base URL
/// 2. **Reviews**: Any HTTP answer from the reviews base URL
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "movie_info": { "status": "ok", "message": "MoviesInfoService reachable" },
///     "reviews": { "status": "ok", "message": "ReviewsService reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let health = state.movie_service.upstream_health().await;

    let response = HealthResponse {
        status: if health.movie_info && health.reviews {
            "healthy"
        } else {
            "degraded"
        }
        .to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            movie_info: check("MoviesInfoService", health.movie_info),
            reviews: check("ReviewsService", health.reviews),
        },
    };

    if health.movie_info && health.reviews {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check(service: &str, reachable: bool) -> CheckStatus {
    if reachable {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{service} reachable")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some(format!("{service} connection failed")),
        }
    }
}
