use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

pub const ADDR_VAR: &str = "DASHBOARD_API_ADDR";
pub const SEED_FILE_VAR: &str = "DASHBOARD_SEED_FILE";
pub const DEFAULT_ADDR: &str = "127.0.0.1:5001";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidAddr { var: &'static str, value: String },
}

/// Runtime settings for the API server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// JSON seed file; the bundled sample data is used when unset
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the config from any variable lookup, treating blank values as unset
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let raw_addr = read(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        Ok(Self {
            addr,
            seed_file: read(SEED_FILE_VAR).map(PathBuf::from),
        })
    }
}
