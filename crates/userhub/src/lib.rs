//! Top-level facade crate for userhub.
//!
//! Re-exports the core types and both service libraries so users can depend
//! on a single crate.

pub mod core {
    pub use userhub_core::*;
}

pub mod auth {
    pub use userhub_auth::*;
}

pub mod users {
    pub use userhub_users::*;
}
