//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream clients, the gateway service and the Axum server lifecycle.

use crate::application::services::MovieService;
use crate::config::Config;
use crate::infrastructure::http::{HttpMovieInfoClient, HttpReviewClient, build_http_client};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the gateway service from configuration.
///
/// Both upstream clients share a single connection pool whose timeout is
/// `REQUEST_TIMEOUT_MS`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_movie_service(config: &Config) -> Result<MovieService> {
    let http = build_http_client(config.request_timeout()).context("Failed to build HTTP client")?;
    let retry = config.retry_policy();

    let movie_info = Arc::new(HttpMovieInfoClient::new(
        http.clone(),
        config.movie_info_url.clone(),
        retry,
    ));
    let reviews = Arc::new(HttpReviewClient::new(
        http,
        config.reviews_url.clone(),
        retry,
    ));

    Ok(MovieService::new(movie_info, reviews, config.fetch_mode()))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared upstream connection pool
/// - Movie info and review clients
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let movie_service = build_movie_service(&config)?;
    tracing::info!("Upstream clients ready");

    let state = AppState::new(Arc::new(movie_service));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
