//! userhub users service library entry.
//!
//! CRUD over the `users` table with per-verb request/error counters and
//! latency histograms served on `/metrics`. Consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
