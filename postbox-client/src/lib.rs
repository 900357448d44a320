//! Client library for the hosted posts database.
//!
//! The hosted service exposes the `posts` table through a PostgREST-style
//! REST surface; this crate wraps the four operations the application
//! consumes behind a typed API: list newest-first, insert returning the
//! stored row, partial update returning the updated row, delete by id.
//!
//! Failures come back as a single [`PostboxClientError`] union whose display
//! form is the best available human-readable message, so callers never
//! inspect response shapes themselves.
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;

pub use error::{PostboxClientError, PostboxClientResult};
pub use http_client::PostboxClient;
pub use models::{Post, PostPatch};
