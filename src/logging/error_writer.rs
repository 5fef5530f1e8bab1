//! ERROR-severity line writer for embedding into other facilities

use std::fmt;
use std::io;

use tracing_subscriber::fmt::MakeWriter;

use super::destination::{write_entry, SharedDestination};
use super::entry::LogEntry;
use super::severity::Severity;

/// Line writer bound to a logger's destination at ERROR severity
///
/// Each `write` call becomes one ERROR line; a single trailing newline in the
/// payload is dropped so `writeln!` and `write!` produce the same output.
/// `write_fmt` formats the whole message first, so one `write!` is one line.
/// The handle is cheap to clone and can be used as a `tracing_subscriber` writer.
#[derive(Clone)]
pub struct ErrorWriter {
    destination: SharedDestination,
}

impl ErrorWriter {
    pub(crate) fn new(destination: SharedDestination) -> Self {
        Self { destination }
    }

    /// Write a formatted message as one ERROR line
    pub fn print(&self, args: fmt::Arguments<'_>) {
        self.emit(fmt::format(args));
    }

    fn emit(&self, message: String) {
        write_entry(&self.destination, &LogEntry::new(Severity::Error, message));
    }
}

impl io::Write for ErrorWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let text = String::from_utf8_lossy(buf);
        let message = text.strip_suffix('\n').unwrap_or(&text);
        self.emit(message.to_string());
        Ok(buf.len())
    }

    fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let text = fmt::format(args);
        io::Write::write_all(self, text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for ErrorWriter {
    type Writer = ErrorWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl fmt::Debug for ErrorWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorWriter").finish_non_exhaustive()
    }
}
