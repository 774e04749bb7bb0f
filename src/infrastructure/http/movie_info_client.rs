//! reqwest-backed client for the movie-info store.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::retry::RetryPolicy;
use super::transport;
use crate::domain::clients::{MovieInfoClient, Upstream, UpstreamError};
use crate::domain::entities::MovieInfo;

const UPSTREAM: Upstream = Upstream::MovieInfo;

/// Calls `GET {base_url}/{id}` on the movie-info store.
#[derive(Clone)]
pub struct HttpMovieInfoClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
}

impl HttpMovieInfoClient {
    /// Creates a client sharing the given connection pool.
    pub fn new(http: Client, base_url: Url, retry: RetryPolicy) -> Self {
        Self {
            http,
            base_url,
            retry,
        }
    }

    /// Builds the lookup URL, percent-encoding `id` as a single path segment.
    fn movie_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(id);
        }
        url
    }
}

#[async_trait]
impl MovieInfoClient for HttpMovieInfoClient {
    async fn fetch(&self, id: &str) -> Result<MovieInfo, UpstreamError> {
        let url = self.movie_url(id);
        let reply = transport::get(&self.http, UPSTREAM, &url, &self.retry).await?;

        if let Some(err) = transport::error_for_status(UPSTREAM, id, &reply) {
            return Err(err);
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

    fn client(base: &str) -> HttpMovieInfoClient {
        HttpMovieInfoClient::new(Client::new(), Url::parse(base).unwrap(), RetryPolicy::none())
    }

    #[test]
    fn test_movie_url_appends_id() {
        let client = client("http://localhost:8080/v1/movieinfos");

        assert_eq!(
            client.movie_url("abc").as_str(),
            "http://localhost:8080/v1/movieinfos/abc"
        );
    }

    #[test]
    fn test_movie_url_with_trailing_slash() {
        let client = client("http://localhost:8080/v1/movieinfos/");

        assert_eq!(
            client.movie_url("abc").as_str(),
            "http://localhost:8080/v1/movieinfos/abc"
        );
    }

    #[test]
    fn test_movie_url_encodes_id() {
        let client = client("http://localhost:8080/v1/movieinfos");

        assert_eq!(
            client.movie_url("a/b c").as_str(),
            "http://localhost:8080/v1/movieinfos/a%2Fb%20c"
        );
    }
}
