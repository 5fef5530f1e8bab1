//! Error types for logger construction and configuration
//!
//! Logging calls never fail; these errors only come from setting a logger up.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    /// A file destination (or its parent directory) could not be opened
    #[error("failed to open log destination {}: {source}", .path.display())]
    OpenDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but could not be read
    #[error("failed to read config file {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::LoggerConfig`]
    #[error("failed to parse config file {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An environment override holds a value that is not a boolean
    #[error("invalid value '{value}' for {var}, expected a boolean")]
    InvalidEnv { var: &'static str, value: String },
}
