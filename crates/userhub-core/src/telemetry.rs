use tracing_subscriber::EnvFilter;

use crate::config::LoggingSection;
use crate::error::{Result, UserHubError};

/// Install the global fmt subscriber. `RUST_LOG` wins over `logging.level`.
pub fn init_tracing(cfg: &LoggingSection) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(cfg.level.trim())
            .map_err(|e| UserHubError::BadRequest(format!("invalid logging.level: {e}")))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| UserHubError::Internal(format!("tracing init failed: {e}")))
}
