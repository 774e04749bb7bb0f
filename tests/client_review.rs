mod common;

use httpmock::prelude::*;
use url::Url;

use common::TestSettings;
use movies_service::domain::clients::{ReviewClient, Upstream, UpstreamError};

#[tokio::test]
async fn test_fetch_by_movie_id_preserves_order() {
    let upstream = MockServer::start_async().await;
    let mock = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/reviews")
                .query_param("movieInfoId", "abc");
            then.status(200).json_body(common::reviews_json());
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let reviews = client.fetch_by_movie_id("abc").await.unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].review_id.as_deref(), Some("1"));
    assert_eq!(reviews[1].review_id.as_deref(), Some("2"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_empty() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(404);
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let reviews = client.fetch_by_movie_id("abc").await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_client_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(400).body("movieInfoId must be a number");
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let err = client.fetch_by_movie_id("abc").await.unwrap_err();

    assert_eq!(
        err,
        UpstreamError::Client {
            upstream: Upstream::Reviews,
            status: 400,
            message: "movieInfoId must be a number".to_string()
        }
    );
}

#[tokio::test]
async fn test_server_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(502).body("bad gateway");
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let err = client.fetch_by_movie_id("abc").await.unwrap_err();

    assert_eq!(err.to_string(), "Server Exception in ReviewsService bad gateway");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(200).body("{\"not\": \"a list\"}");
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let err = client.fetch_by_movie_id("abc").await.unwrap_err();

    assert!(matches!(
        err,
        UpstreamError::Decode {
            upstream: Upstream::Reviews,
            ..
        }
    ));
}

#[tokio::test]
async fn test_connection_refused_is_unavailable() {
    let client = common::create_review_client(
        Url::parse("http://127.0.0.1:1/v1/reviews").unwrap(),
        TestSettings::default(),
    );

    let err = client.fetch_by_movie_id("abc").await.unwrap_err();

    assert!(err.is_transient());
    assert_eq!(err.upstream(), Upstream::Reviews);
}

#[tokio::test]
async fn test_no_content_is_empty() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(204);
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let reviews = client.fetch_by_movie_id("abc").await.unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_ok_without_body_is_empty() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/reviews");
            then.status(200).body("  \n");
        })
        .await;

    let client = common::create_review_client(common::reviews_url(&upstream), TestSettings::default());
    let reviews = client.fetch_by_movie_id("abc").await.unwrap();

    assert!(reviews.is_empty());
}
