//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with upstream status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Reachability of each upstream store.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub movie_info: CheckStatus,
    pub reviews: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
