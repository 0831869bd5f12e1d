//! Service config loader (strict parsing + environment overrides).

pub mod schema;

use std::{env, fmt, fs, io::ErrorKind};

use crate::error::{Result, UserHubError};

pub use schema::{DatabaseSection, LoggingSection, ServerSection, ServiceConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "USERHUB_CONFIG";
/// Environment variable carrying the Postgres connection string.
pub const DATABASE_URI_ENV: &str = "DATABASE_URI";
/// Environment variable overriding `server.listen`.
pub const LISTEN_ENV: &str = "USERHUB_LISTEN";

const DEFAULT_CONFIG_PATH: &str = "userhub.yaml";

/// Where the effective config came from. Reported by `main` once tracing is
/// up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// The named file did not exist.
    Defaults(String),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "file {path}"),
            ConfigSource::Defaults(path) => write!(f, "defaults ({path} not found)"),
        }
    }
}

/// Resolve the config path from the environment, load it (defaults when the
/// file is absent), apply environment overrides and validate.
pub fn load() -> Result<(ServiceConfig, ConfigSource)> {
    let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_with(&path, |key| env::var(key).ok())
}

/// [`load`] with an explicit path and override lookup.
pub fn load_with<F>(path: &str, lookup: F) -> Result<(ServiceConfig, ConfigSource)>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut cfg, source) = match fs::read_to_string(path) {
        Ok(s) => (parse(&s)?, ConfigSource::File(path.to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            (ServiceConfig::default(), ConfigSource::Defaults(path.to_string()))
        }
        Err(e) => return Err(UserHubError::Internal(format!("read config failed: {e}"))),
    };
    cfg.apply_overrides(lookup);
    cfg.validate()?;
    Ok((cfg, source))
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg = parse(s)?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse(s: &str) -> Result<ServiceConfig> {
    serde_yaml::from_str(s).map_err(|e| UserHubError::BadRequest(format!("invalid yaml: {e}")))
}
