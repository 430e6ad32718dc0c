//! Host configuration from the environment.
//!
//! `PORT` and `BIND_HOST` choose the listen address. Leptos build settings
//! (site root, output name) come from `get_configuration` separately.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },
    #[error("invalid {key}: {value:?} is not an IP address")]
    InvalidHost { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST, port: DEFAULT_PORT }
    }
}

impl Config {
    /// Read `BIND_HOST` and `PORT`, falling back to `0.0.0.0:3000`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_keys("BIND_HOST", "PORT")
    }

    fn from_keys(host_key: &'static str, port_key: &'static str) -> Result<Self, ConfigError> {
        let host = match env_trimmed(host_key) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidHost { key: host_key, value: raw })?,
            None => DEFAULT_HOST,
        };
        let port = match env_trimmed(port_key) {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort { key: port_key, value: raw })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Non-empty, trimmed value of an environment variable.
fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_owned())
        .filter(|value| !value.is_empty())
}
