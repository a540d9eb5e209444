//! Runtime configuration.
//!
//! # Design Decisions
//! - Config is built once at startup from CLI flags and never mutated
//! - The root path is resolved (home expansion + normalization) on
//!   construction, so the rest of the system only sees a canonical path
//! - Nonexistent roots are not a startup error; requests against them
//!   surface as 404/403 from the file server

use std::path::PathBuf;

use crate::paths;

/// Immutable server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Resolved root directory files are served from.
    pub root: PathBuf,

    /// Listen address (e.g. "0.0.0.0").
    pub host: String,

    /// Listen TCP port.
    pub port: u16,
}

impl ServerConfig {
    /// Build a config, resolving `root` (a leading `~` expands to `$HOME`).
    pub fn new(root: &str, host: String, port: u16) -> Self {
        Self {
            root: paths::resolve(root),
            host,
            port,
        }
    }

    /// The `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host.trim(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}
