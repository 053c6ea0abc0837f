//! Configuration module for the registry backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Prefix for generated ID numbers, e.g. "BGR-POL"
    pub id_prefix: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let db_path = env::var("POLICE_ID_DB_PATH")
            .unwrap_or_else(|_| "./data/police_id.sqlite".to_string())
            .into();

        let bind_addr = env::var("POLICE_ID_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .expect("Invalid POLICE_ID_BIND_ADDR format");

        let id_prefix = env::var("POLICE_ID_PREFIX").unwrap_or_else(|_| "BGR-POL".to_string());

        let log_level = env::var("POLICE_ID_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            db_path,
            bind_addr,
            id_prefix,
            log_level,
        }
    }
}
