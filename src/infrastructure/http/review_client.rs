//! reqwest-backed client for the review store.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::retry::RetryPolicy;
use super::transport;
use crate::domain::clients::{ReviewClient, Upstream, UpstreamError};
use crate::domain::entities::Review;

const UPSTREAM: Upstream = Upstream::Reviews;

/// Calls `GET {base_url}?movieInfoId={id}` on the review store.
#[derive(Clone)]
pub struct HttpReviewClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl HttpReviewClient {
    /// Creates a client sharing the given connection pool.
    pub fn new(http: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    fn reviews_url(&self, movie_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("movieInfoId", movie_id);
        url
    }
}

#[async_trait]
impl ReviewClient for HttpReviewClient {
    async fn fetch_by_movie_id(&self, movie_id: &str) -> Result<Vec<Review>, UpstreamError> {
        let url = self.reviews_url(movie_id);
        let reply = transport::get(&self.http, UPSTREAM, &url, &self.retry).await?;

        // No reviews yet is a normal state, not a failure.
        if reply.status == StatusCode::NOT_FOUND {
            debug!(movie_id, "Review store returned 404, using empty review list");
            return Ok(Vec::new());
        }

        if let Some(err) = transport::error_for_status(UPSTREAM, movie_id, &reply) {
            return Err(err);
        }

        // A 2xx without a body (204 included) carries no reviews.
        if reply.body.trim().is_empty() {
            debug!(movie_id, status = reply.status.as_u16(), "Review store returned no body");
            return Ok(Vec::new());
        }

        transport::decode(UPSTREAM, &reply.body)
    }

    async fn health_check(&self) -> bool {
        transport::probe(&self.http, &self.base_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reviews_url_adds_query_param() {
        let client = HttpReviewClient::new(
            Client::new(),
            Url::parse("http://localhost:8081/v1/reviews").unwrap(),
            RetryPolicy::none(),
        );

        assert_eq!(
            client.reviews_url("abc").as_str(),
            "http://localhost:8081/v1/reviews?movieInfoId=abc"
        );
    }

    #[test]
    fn test_reviews_url_encodes_id() {
        let client = HttpReviewClient::new(
            Client::new(),
            Url::parse("http://localhost:8081/v1/reviews").unwrap(),
            RetryPolicy::none(),
        );

        assert_eq!(
            client.reviews_url("a&b").as_str(),
            "http://localhost:8081/v1/reviews?movieInfoId=a%26b"
        );
    }
}
