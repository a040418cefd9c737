//! Environment configuration for the gateway binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use roster_core::{CapacityPolicy, CoreError, Seed};

/// Default bind address when `ROSTER_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// `ROSTER_LISTEN_ADDR` is not a `host:port` socket address.
    #[error("invalid ROSTER_LISTEN_ADDR '{value}': {source}")]
    ListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// The capacity policy or seed file is invalid.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Runtime settings for the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub static_dir: PathBuf,
    /// JSON file replacing the built-in seed.
    pub seed_path: Option<PathBuf>,
    pub capacity_policy: CapacityPolicy,
}

impl GatewayConfig {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if any variable holds an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if any variable holds an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("ROSTER_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let listen_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::ListenAddr { value: addr.clone(), source })?;

        let static_dir = lookup("ROSTER_STATIC_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        let seed_path = lookup("ROSTER_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let capacity_policy = match lookup("ROSTER_CAPACITY_POLICY") {
            Some(value) => value.parse::<CapacityPolicy>()?,
            None => CapacityPolicy::default(),
        };

        Ok(Self {
            listen_addr,
            static_dir,
            seed_path,
            capacity_policy,
        })
    }

    /// Load the configured seed, or the built-in one when no path is set.
    ///
    /// # Errors
    /// Returns [`ConfigError::Core`] if the seed file cannot be read or parsed.
    pub fn load_seed(&self) -> Result<Seed, ConfigError> {
        match &self.seed_path {
            Some(path) => Ok(Seed::from_path(path)?),
            None => Ok(Seed::default()),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_path: None,
            capacity_policy: CapacityPolicy::default(),
        }
    }
}
