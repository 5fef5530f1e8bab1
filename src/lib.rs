//! levlog - minimal leveled logger
//!
//! Formats messages with a severity prefix and a microsecond timestamp, writes
//! them to the console (or any `Write` destination), and gates INFO/WARNING
//! output behind a verbose flag. Entries can be routed to a channel instead.
//!
//! ```
//! use levlog::{log_error, log_info, Logger, MemoryBuffer};
//!
//! let buffer = MemoryBuffer::new();
//! let logger = Logger::new(false);
//! logger.set_output(buffer.clone());
//!
//! log_info!(logger, "not shown while quiet");
//! log_error!(logger, "always shown: {}", 42);
//!
//! assert!(buffer.contents().starts_with("ERROR: "));
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{LoggerConfig, OutputTarget};
pub use error::LoggerError;
pub use logging::{
    Destination, ErrorWriter, LogEntry, Logger, MemoryBuffer, Severity, FATAL_EXIT_CODE,
};
