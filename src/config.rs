//! Configuration for building a [`Logger`](crate::Logger)
//!
//! ```toml
//! verbose = true
//!
//! [output]
//! kind = "file"
//! path = "/var/log/app.log"
//! append = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoggerError;
use crate::logging::Destination;

/// Environment variable that overrides [`LoggerConfig::verbose`]
pub const VERBOSE_ENV: &str = "LEVLOG_VERBOSE";

/// Where a configured logger writes text lines
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum OutputTarget {
    /// INFO/WARNING to stdout, ERROR/FATAL to stderr
    #[default]
    Split,
    /// Everything to stdout
    Stdout,
    /// Everything to stderr
    Stderr,
    /// Everything to a file
    File {
        path: PathBuf,
        #[serde(default = "default_append")]
        append: bool,
    },
}

fn default_append() -> bool {
    true
}

impl OutputTarget {
    /// Open the destination this target describes
    pub fn open(&self) -> Result<Destination, LoggerError> {
        match self {
            OutputTarget::Split => Ok(Destination::Split),
            OutputTarget::Stdout => Ok(Destination::writer(std::io::stdout())),
            OutputTarget::Stderr => Ok(Destination::writer(std::io::stderr())),
            OutputTarget::File { path, append } => Destination::open_file(path, *append),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Emit INFO and WARNING lines
    #[serde(default)]
    pub verbose: bool,

    /// Text destination
    #[serde(default)]
    pub output: OutputTarget,
}

impl LoggerConfig {
    /// Load configuration from the default location, or return defaults if not found
    ///
    /// The `LEVLOG_VERBOSE` override is applied on top.
    pub fn load() -> Result<Self, LoggerError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a file, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, LoggerError> {
        let mut config = if path.exists() {
            let content =
                std::fs::read_to_string(path).map_err(|source| LoggerError::ReadConfig {
                    path: path.to_path_buf(),
                    source,
                })?;
            let config = Self::from_toml(&content).map_err(|source| LoggerError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!("Loaded logger config from {}", path.display());
            config
        } else {
            Self::default()
        };

        if let Some(value) = std::env::var_os(VERBOSE_ENV) {
            config.verbose = parse_bool_env(VERBOSE_ENV, &value.to_string_lossy())?;
        }

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Parse a boolean-like environment value
fn parse_bool_env(var: &'static str, value: &str) -> Result<bool, LoggerError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(LoggerError::InvalidEnv {
            var,
            value: value.to_string(),
        }),
    }
}

/// Get the base configuration directory (<config dir>/levlog)
/// Falls back to ./.levlog if the platform config directory cannot be determined
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("levlog"))
        .unwrap_or_else(|| PathBuf::from(".levlog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LoggerConfig::default();
        assert!(!config.verbose);
        assert_eq!(config.output, OutputTarget::Split);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = LoggerConfig::from_toml("").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_parse_file_output() {
        let config = LoggerConfig::from_toml(
            r#"
            verbose = true

            [output]
            kind = "file"
            path = "/tmp/app.log"
            "#,
        )
        .unwrap();

        assert!(config.verbose);
        assert_eq!(
            config.output,
            OutputTarget::File {
                path: PathBuf::from("/tmp/app.log"),
                append: true,
            }
        );
    }

    #[test]
    fn test_parse_stream_outputs() {
        let config = LoggerConfig::from_toml("[output]\nkind = \"stderr\"\n").unwrap();
        assert_eq!(config.output, OutputTarget::Stderr);

        let config = LoggerConfig::from_toml("[output]\nkind = \"stdout\"\n").unwrap();
        assert_eq!(config.output, OutputTarget::Stdout);
    }

    #[test]
    fn test_parse_unknown_output_kind_fails() {
        assert!(LoggerConfig::from_toml("[output]\nkind = \"syslog\"\n").is_err());
        // In-memory output is only reachable through Logger::set_output
        assert!(LoggerConfig::from_toml("[output]\nkind = \"memory\"\n").is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = LoggerConfig {
            verbose: true,
            output: OutputTarget::File {
                path: PathBuf::from("logs/app.log"),
                append: false,
            },
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed = LoggerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "verbose = \"sometimes\"").unwrap();

        let err = LoggerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, LoggerError::ParseConfig { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_parse_bool_env() {
        assert!(parse_bool_env(VERBOSE_ENV, "1").unwrap());
        assert!(parse_bool_env(VERBOSE_ENV, "TRUE").unwrap());
        assert!(parse_bool_env(VERBOSE_ENV, " on ").unwrap());
        assert!(!parse_bool_env(VERBOSE_ENV, "0").unwrap());
        assert!(!parse_bool_env(VERBOSE_ENV, "off").unwrap());
        assert!(parse_bool_env(VERBOSE_ENV, "maybe").is_err());
    }

    #[test]
    fn test_file_target_opens_destination() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out/app.log");
        let target = OutputTarget::File {
            path: path.clone(),
            append: true,
        };

        assert!(matches!(target.open().unwrap(), Destination::Shared(_)));
        assert!(path.exists());
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with("levlog") || dir.ends_with(".levlog"));
        assert!(config_file_path().ends_with("config.toml"));
    }
}
