#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use httpmock::MockServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use movies_service::application::services::{FetchMode, MovieService};
use movies_service::infrastructure::http::{
    HttpMovieInfoClient, HttpReviewClient, RetryPolicy, build_http_client,
};
use movies_service::routes::app_router;
use movies_service::state::AppState;

pub const MOVIE_INFO_PATH: &str = "/v1/movieinfos";
pub const REVIEWS_PATH: &str = "/v1/reviews";

/// Upstream settings for a test gateway.
#[derive(Debug, Clone, Copy)]
pub struct TestSettings {
    pub fetch_mode: FetchMode,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            fetch_mode: FetchMode::Sequential,
            timeout: Duration::from_secs(2),
            retry: RetryPolicy::none(),
        }
    }
}

pub fn movie_info_url(server: &MockServer) -> Url {
    Url::parse(&server.url(MOVIE_INFO_PATH)).unwrap()
}

pub fn reviews_url(server: &MockServer) -> Url {
    Url::parse(&server.url(REVIEWS_PATH)).unwrap()
}

pub fn create_movie_info_client(base_url: Url, settings: TestSettings) -> HttpMovieInfoClient {
    let http = build_http_client(settings.timeout).unwrap();
    HttpMovieInfoClient::new(http, base_url, settings.retry)
}

pub fn create_review_client(base_url: Url, settings: TestSettings) -> HttpReviewClient {
    let http = build_http_client(settings.timeout).unwrap();
    HttpReviewClient::new(http, base_url, settings.retry)
}

/// Builds a gateway whose two upstreams both live on `server`.
pub fn create_test_state(server: &MockServer, settings: TestSettings) -> AppState {
    let movie_info = create_movie_info_client(movie_info_url(server), settings);
    let reviews = create_review_client(reviews_url(server), settings);

    let service = MovieService::new(Arc::new(movie_info), Arc::new(reviews), settings.fetch_mode);
    AppState::new(Arc::new(service))
}

/// Serves the production router, middleware included.
pub fn create_test_server(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));

    TestServer::new(app).unwrap()
}

pub fn movie_info_json() -> Value {
    json!({
        "movieInfoId": "abc",
        "name": "Batman Begins",
        "year": 2005,
        "cast": ["Christian Bale", "Michael Cane"],
        "releaseDate": "2005-06-15"
    })
}

pub fn reviews_json() -> Value {
    json!([
        { "reviewId": "1", "movieInfoId": 1, "comment": "Awesome Movie", "rating": 9.0 },
        { "reviewId": "2", "movieInfoId": 1, "comment": "Awesome Movie1", "rating": 9.0 }
    ])
}
