//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached generation results
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Path of the serialized cache snapshot file
    pub snapshot_path: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached results (default: 50)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SNAPSHOT_PATH` - Cache snapshot file (default: email_cache.json)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            snapshot_path: env::var("SNAPSHOT_PATH")
                .ok()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("email_cache.json")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 50,
            server_port: 3000,
            snapshot_path: PathBuf::from("email_cache.json"),
        }
    }
}
