//! Application error type and its HTTP rendering.
//!
//! Every failure reaching the HTTP boundary is rendered as a definitive status
//! with a deterministic plain-text message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::clients::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    UpstreamClient { status: StatusCode, message: String },

    #[error("{message}")]
    UpstreamServer { message: String },

    #[error("{message}")]
    UpstreamUnavailable { message: String },

    #[error("{message}")]
    Decode { message: String },

}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UpstreamClient { status, .. } => *status,
            AppError::UpstreamServer { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Decode { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        match err {
            // Only the movie-info store reports NotFound; the review client
            // turns a 404 into an empty list.
            UpstreamError::NotFound { id, .. } => AppError::not_found(format!(
                "There is no MovieInfo available for the passed id : {id}"
            )),
            UpstreamError::Client {
                status, message, ..
            } => AppError::UpstreamClient {
                status: StatusCode::from_u16(status)
                    .ok()
                    .filter(StatusCode::is_client_error)
                    .unwrap_or(StatusCode::BAD_REQUEST),
                message,
            },
            UpstreamError::Server { message, .. } => AppError::UpstreamServer { message },
            UpstreamError::Unavailable { upstream, .. } => AppError::UpstreamUnavailable {
                message: format!("{upstream} is unavailable"),
            },
            UpstreamError::Decode { upstream, .. } => AppError::Decode {
                message: format!("Invalid response from {upstream}"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "Request failed");
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clients::Upstream;

    #[test]
    fn test_movie_info_not_found_message() {
        let err = AppError::from(UpstreamError::NotFound {
            upstream: Upstream::MovieInfo,
            id: "abc".to_string(),
        });

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_string(),
            "There is no MovieInfo available for the passed id : abc"
        );
    }

    #[test]
    fn test_client_error_keeps_upstream_status() {
        let err = AppError::from(UpstreamError::Client {
            upstream: Upstream::Reviews,
            status: 422,
            message: "rating.negative".to_string(),
        });

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_string(), "rating.negative");
    }

    #[test]
    fn test_server_error_message_is_forwarded() {
        let err = AppError::from(UpstreamError::server(Upstream::MovieInfo, "X"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server Exception in MoviesInfoService X");
    }

    #[test]
    fn test_unavailable_and_decode() {
        let unavailable = AppError::from(UpstreamError::Unavailable {
            upstream: Upstream::Reviews,
            reason: "connection refused".to_string(),
        });
        let decode = AppError::from(UpstreamError::Decode {
            upstream: Upstream::MovieInfo,
            reason: "expected value".to_string(),
        });

        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unavailable.to_string(), "ReviewsService is unavailable");
        assert_eq!(decode.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(decode.to_string(), "Invalid response from MoviesInfoService");
    }
}
