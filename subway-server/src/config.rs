//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Environment variable naming the network snapshot file.
pub const NETWORK_VAR: &str = "SUBWAY_NETWORK";

/// Environment variable naming the listen address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path to the network snapshot JSON.
    pub network_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    ///
    /// An unparseable address is reported and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let network_path = lookup(NETWORK_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.network_path);

        let addr = match lookup(ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "Invalid {}, using default", ADDR_VAR);
                defaults.addr
            }),
            None => defaults.addr,
        };

        Self { network_path, addr }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from("network.json"),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
