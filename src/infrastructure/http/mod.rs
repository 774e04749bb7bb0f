//! HTTP implementations of the upstream client ports.
//!
//! Both clients share one reqwest connection pool built by
//! [`build_http_client`] and translate upstream statuses into
//! [`crate::domain::clients::UpstreamError`] in [`transport`].

mod movie_info_client;
mod review_client;
pub mod retry;
pub mod transport;

pub use movie_info_client::HttpMovieInfoClient;
pub use retry::RetryPolicy;
pub use review_client::HttpReviewClient;
pub use transport::build_http_client;
