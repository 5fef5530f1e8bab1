//! The leveled logger
//!
//! A [`Logger`] has two delivery modes:
//!
//! - **Writer mode** (default): each call renders a text line
//!   `<PREFIX><YYYY/MM/DD HH:MM:SS.ffffff> <message>` and writes it to the
//!   configured [`Destination`].
//! - **Channel mode**: once an output channel is set, each call sends a
//!   [`LogEntry`] on it instead and nothing is written.
//!
//! INFO and WARNING are dropped entirely while verbose is off. ERROR and FATAL
//! always go out. FATAL terminates the process with status 1 in writer mode only;
//! in channel mode the entry is sent and control returns to the caller so a
//! central consumer can decide what to do. If the channel's receiver has been
//! dropped, the entry is written to the destination as in writer mode, and a
//! FATAL then exits.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crossbeam_channel::{SendError, Sender};

use super::destination::{write_entry, Destination, SharedDestination};
use super::entry::LogEntry;
use super::error_writer::ErrorWriter;
use super::severity::Severity;
use crate::config::LoggerConfig;
use crate::error::LoggerError;

/// Exit status used by [`Logger::fatal`] in writer mode
pub const FATAL_EXIT_CODE: i32 = 1;

/// How a single call was delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Writer,
    Channel,
}

/// Leveled logger with a verbosity gate and optional channel delivery
///
/// All methods take `&self`; the logger can be shared across threads behind an
/// `Arc`. Each text line is written atomically, ordering between threads is
/// whatever the destination lock hands out.
#[derive(Debug)]
pub struct Logger {
    destination: SharedDestination,
    verbose: AtomicBool,
    channel: RwLock<Option<Sender<LogEntry>>>,
}

impl Logger {
    /// Create a logger writing to stdout (INFO/WARNING) and stderr (ERROR/FATAL)
    pub fn new(verbose: bool) -> Self {
        Self::with_destination(verbose, Destination::Split)
    }

    /// Create a logger with an explicit destination
    pub fn with_destination(verbose: bool, destination: Destination) -> Self {
        Self {
            destination: Arc::new(Mutex::new(destination)),
            verbose: AtomicBool::new(verbose),
            channel: RwLock::new(None),
        }
    }

    /// Build a logger from configuration, opening a file destination if needed
    pub fn from_config(config: &LoggerConfig) -> Result<Self, LoggerError> {
        let destination = config.output.open()?;
        Ok(Self::with_destination(config.verbose, destination))
    }

    /// Redirect every severity to a single writer
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.set_destination(Destination::writer(writer));
    }

    /// Replace the destination
    ///
    /// Takes the same lock as writes, so a line in flight finishes on the old
    /// destination and the next one goes to the new.
    pub fn set_destination(&self, destination: Destination) {
        let mut guard = self
            .destination
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = destination;
    }

    /// Switch to channel mode: every later call sends a [`LogEntry`] instead of writing
    ///
    /// The channel may be bounded or unbounded. A full bounded channel blocks the
    /// logging call until a reader makes room.
    pub fn set_output_channel(&self, sender: Sender<LogEntry>) {
        *self.channel_slot_mut() = Some(sender);
    }

    /// Return to writer mode
    pub fn clear_output_channel(&self) {
        *self.channel_slot_mut() = None;
    }

    /// Check if channel mode is active
    pub fn has_output_channel(&self) -> bool {
        self.channel
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or_else(|poisoned| poisoned.into_inner().is_some())
    }

    /// Enable or disable INFO and WARNING output
    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    /// Current verbosity
    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Handle to the ERROR line writer, for facilities that want an `io::Write`
    ///
    /// The handle shares this logger's destination and follows later
    /// [`set_output`](Self::set_output) calls. It always writes text, even while
    /// channel mode is active.
    pub fn error_logger(&self) -> ErrorWriter {
        ErrorWriter::new(Arc::clone(&self.destination))
    }

    /// Log at INFO; no-op unless verbose
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    /// Log at WARNING; no-op unless verbose
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warning, args);
    }

    /// Log at ERROR regardless of verbosity
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    /// Log at FATAL
    ///
    /// In writer mode the line is written and flushed, then the process exits
    /// with [`FATAL_EXIT_CODE`]. In channel mode the entry is sent and this
    /// returns normally. A channel whose receiver is gone counts as writer mode.
    pub fn fatal(&self, args: fmt::Arguments<'_>) {
        let entry = LogEntry::new(Severity::Fatal, fmt::format(args));
        match self.deliver(entry) {
            Delivery::Channel => {}
            Delivery::Writer => std::process::exit(FATAL_EXIT_CODE),
        }
    }

    /// Log at any severity; never exits, even at FATAL
    ///
    /// Use [`fatal`](Self::fatal) for the terminating behavior. The verbosity
    /// gate still applies to INFO and WARNING.
    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if severity.is_gated() && !self.verbose() {
            return;
        }
        self.deliver(LogEntry::new(severity, fmt::format(args)));
    }

    fn deliver(&self, entry: LogEntry) -> Delivery {
        // Clone the sender out so a blocking send never holds the slot lock
        let entry = match self.output_channel() {
            Some(sender) => match sender.send(entry) {
                Ok(()) => return Delivery::Channel,
                // Receiver gone: fall back to the text destination
                Err(SendError(entry)) => entry,
            },
            None => entry,
        };

        write_entry(&self.destination, &entry);
        Delivery::Writer
    }

    fn output_channel(&self) -> Option<Sender<LogEntry>> {
        self.channel
            .read()
            .map(|slot| slot.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    fn channel_slot_mut(&self) -> std::sync::RwLockWriteGuard<'_, Option<Sender<LogEntry>>> {
        self.channel
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(false)
    }
}
