//! userhub auth service library entry.
//!
//! Registration, login and cookie-based session lookup. The `/auth` route is
//! shaped for reverse-proxy forward auth: it answers with the session's
//! account fields as `X-*` headers. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod ops;
pub mod router;
pub mod session;
pub mod store;
