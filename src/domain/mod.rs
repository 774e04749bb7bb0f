//! Domain layer containing movie entities and upstream ports.
//!
//! The domain knows nothing about HTTP libraries or server wiring. It defines
//! the data model and the client traits the gateway orchestrates.
//!
//! # Architecture
//!
//! - [`entities`] - Movie info, review and aggregate data structures
//! - [`clients`] - Upstream client traits and the shared failure type
//!
//! # Request Flow
//!
//! 1. HTTP handler receives `GET /v1/movies/{id}`
//! 2. [`crate::application::services::MovieService`] asks [`clients::MovieInfoClient`] for the record
//! 3. On success it asks [`clients::ReviewClient`] for the reviews
//! 4. Both are merged into an [`entities::Movie`] and returned

pub mod clients;
pub mod entities;
