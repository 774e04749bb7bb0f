//! Data Transfer Objects for API responses.
//!
//! The movie endpoint serializes [`crate::domain::entities::Movie`] directly,
//! since its shape is the wire contract shared with the upstream stores.

pub mod health;
