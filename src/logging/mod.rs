//! Leveled logging
//!
//! Severity-prefixed text lines on a shared destination, a verbosity gate for
//! INFO and WARNING, and optional structured delivery over a channel.

mod destination;
mod entry;
mod error_writer;
mod logger;
mod macros;
mod severity;

pub use destination::{Destination, MemoryBuffer};
pub use entry::{LogEntry, TIMESTAMP_FORMAT};
pub use error_writer::ErrorWriter;
pub use logger::{Logger, FATAL_EXIT_CODE};
pub use severity::{Severity, Stream};
