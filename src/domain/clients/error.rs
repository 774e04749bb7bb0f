//! Failure taxonomy shared by the upstream clients.

use std::fmt;

/// The backing store an upstream call was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    MovieInfo,
    Reviews,
}

impl Upstream {
    /// Service name used in user-visible error messages.
    pub fn service_name(self) -> &'static str {
        match self {
            Self::MovieInfo => "MoviesInfoService",
            Self::Reviews => "ReviewsService",
        }
    }

    /// Short lowercase label for logs and metrics.
    pub fn label(self) -> &'static str {
        match self {
            Self::MovieInfo => "movie_info",
            Self::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

/// Outcome of an upstream call that did not produce a usable value.
///
/// `Server` messages are already formatted for the caller and must be
/// forwarded unchanged. Only `Unavailable` is transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpstreamError {
    #[error("{upstream} has no record for id {id}")]
    NotFound { upstream: Upstream, id: String },

    #[error("{message}")]
    Client {
        upstream: Upstream,
        status: u16,
        message: String,
    },

    #[error("{message}")]
    Server { upstream: Upstream, message: String },

    #[error("{upstream} is unavailable: {reason}")]
    Unavailable { upstream: Upstream, reason: String },

    #[error("Invalid response from {upstream}: {reason}")]
    Decode { upstream: Upstream, reason: String },
}

impl UpstreamError {
    /// Builds a server error whose message carries the upstream body verbatim.
    pub fn server(upstream: Upstream, body: &str) -> Self {
        Self::Server {
            upstream,
            message: format!("Server Exception in {} {}", upstream.service_name(), body),
        }
    }

    /// The upstream that produced this error.
    pub fn upstream(&self) -> Upstream {
        match self {
            Self::NotFound { upstream, .. }
            | Self::Client { upstream, .. }
            | Self::Server { upstream, .. }
            | Self::Unavailable { upstream, .. }
            | Self::Decode { upstream, .. } => *upstream,
        }
    }

    /// Returns true for connection-level failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Metrics label for the failure kind.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Client { .. } => "client_error",
            Self::Server { .. } => "server_error",
            Self::Unavailable { .. } => "unavailable",
            Self::Decode { .. } => "decode_error",
        }
    }
}
