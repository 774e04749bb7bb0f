//! Shared request execution and status translation for upstream calls.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{error, info};
use url::Url;

use super::retry::{RetryPolicy, with_retries};
use crate::domain::clients::{Upstream, UpstreamError};

/// Status and fully read body of one upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

/// Builds the connection pool shared by both upstream clients.
///
/// `timeout` bounds every request end to end and is also used as the connect
/// timeout.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(concat!("movies-service/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Sends `GET url`, retrying transient failures, and reads the whole body.
pub async fn get(
    http: &Client,
    upstream: Upstream,
    url: &Url,
    retry: &RetryPolicy,
) -> Result<UpstreamReply, UpstreamError> {
    with_retries(retry, upstream, || get_once(http, upstream, url)).await
}

async fn get_once(
    http: &Client,
    upstream: Upstream,
    url: &Url,
) -> Result<UpstreamReply, UpstreamError> {
    let response = http
        .get(url.clone())
        .send()
        .await
        .map_err(|e| unavailable(upstream, e))?;

    let status = response.status();
    info!(upstream = upstream.label(), "Status code is : {}", status.as_u16());

    let body = response
        .text()
        .await
        .map_err(|e| unavailable(upstream, e))?;

    Ok(UpstreamReply { status, body })
}

/// Probes the upstream with a single `GET`; any HTTP answer counts as reachable.
pub async fn probe(http: &Client, url: &Url) -> bool {
    http.get(url.clone()).send().await.is_ok()
}

fn unavailable(upstream: Upstream, e: reqwest::Error) -> UpstreamError {
    let reason = if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    UpstreamError::Unavailable { upstream, reason }
}

/// Maps a non-success status to its failure kind.
///
/// Returns `None` for 2xx. A 404 is reported as [`UpstreamError::NotFound`];
/// callers that treat a missing collection as empty must check for 404 first.
pub fn error_for_status(
    upstream: Upstream,
    id: &str,
    reply: &UpstreamReply,
) -> Option<UpstreamError> {
    let status = reply.status;
    if status.is_success() {
        return None;
    }

    let err = if status == StatusCode::NOT_FOUND {
        UpstreamError::NotFound {
            upstream,
            id: id.to_string(),
        }
    } else if status.is_client_error() {
        UpstreamError::Client {
            upstream,
            status: status.as_u16(),
            message: reply.body.clone(),
        }
    } else if status.is_server_error() {
        UpstreamError::server(upstream, &reply.body)
    } else {
        error!(upstream = upstream.label(), %status, "Unexpected upstream status");
        UpstreamError::Decode {
            upstream,
            reason: format!("unexpected status {status}"),
        }
    };

    Some(err)
}

/// Decodes a 2xx JSON body.
///
/// A failure here means the upstream broke its contract and is logged as an
/// internal fault.
pub fn decode<T: DeserializeOwned>(upstream: Upstream, body: &str) -> Result<T, UpstreamError> {
    serde_json::from_str(body).map_err(|e| {
        error!(upstream = upstream.label(), error = %e, "Failed to decode upstream response");
        UpstreamError::Decode {
            upstream,
            reason: e.to_string(),
        }
    })
}
