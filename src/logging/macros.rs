//! Format-string macros for the leveled logger
//!
//! Each macro takes a logger expression followed by `format!`-style arguments,
//! so placeholders are checked at compile time:
//!
//! ```
//! use levlog::{log_info, Logger};
//!
//! let logger = Logger::new(true);
//! log_info!(logger, "listening on port {}", 8080);
//! ```

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warning(::std::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error(::std::format_args!($($arg)*))
    };
}

/// Exits the process with status 1 unless the logger is in channel mode
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal(::std::format_args!($($arg)*))
    };
}
