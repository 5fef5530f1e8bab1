//! Severity levels and their output table
//!
//! Each severity maps to a line prefix and a default console stream. There is no
//! threshold filtering: INFO and WARNING sit behind the verbosity gate, ERROR and
//! FATAL are always emitted.

use std::fmt;

/// Console stream a severity writes to when no explicit destination is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Severity of a log call, ordered by increasing criticality
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Fatal,
}

impl Severity {
    /// All severities in ascending order
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Get the display name for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Prefix written at the start of every text line
    pub fn prefix(&self) -> &'static str {
        match self {
            Severity::Info => "INFO: ",
            Severity::Warning => "WARNING: ",
            Severity::Error => "ERROR: ",
            Severity::Fatal => "FATAL: ",
        }
    }

    /// Stream used by the split console destination
    pub fn default_stream(&self) -> Stream {
        match self {
            Severity::Info | Severity::Warning => Stream::Stdout,
            Severity::Error | Severity::Fatal => Stream::Stderr,
        }
    }

    /// Whether output at this severity is suppressed when verbose is off
    pub fn is_gated(&self) -> bool {
        matches!(self, Severity::Info | Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}
