//! userhub core: error surface, record types, configuration and the shared
//! Postgres/tracing bootstrap used by both userhub services.
//!
//! No web framework in here. The service crates own routing and
//! response rendering; this crate only hands them typed errors and records.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `UserHubError`/`Result` so a bad row or a bad config file never
//! takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod telemetry;

/// Shared result type.
pub use error::{Result, UserHubError};
