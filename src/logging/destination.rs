//! Output destinations for writer-mode delivery

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::entry::LogEntry;
use super::severity::{Severity, Stream};
use crate::error::LoggerError;

/// Destination handle shared between a logger and its error writer
pub(crate) type SharedDestination = Arc<Mutex<Destination>>;

/// Render an entry and write it under the destination lock
///
/// Rendering happens before the lock is taken; only the physical write is
/// serialized. Write failures are dropped since there is nowhere left to report them.
pub(crate) fn write_entry(destination: &Mutex<Destination>, entry: &LogEntry) {
    let line = entry.render();
    let mut guard = destination
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let _ = guard.write_line(entry.severity, line.as_bytes());
}

/// Where text lines end up
#[derive(Default)]
pub enum Destination {
    /// INFO/WARNING to stdout, ERROR/FATAL to stderr
    #[default]
    Split,
    /// Every severity to the same writer
    Shared(Box<dyn Write + Send>),
}

impl Destination {
    /// Wrap any writer as a shared destination
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Destination::Shared(Box::new(writer))
    }

    /// Open a log file as a shared destination, creating parent directories
    ///
    /// With `append` off an existing file is truncated.
    pub fn open_file(path: &Path, append: bool) -> Result<Self, LoggerError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| LoggerError::OpenDestination {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .open(path)
            .map_err(|source| LoggerError::OpenDestination {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Opened log file {}", path.display());
        Ok(Self::writer(file))
    }

    /// Write one complete line for the given severity and flush it
    pub(crate) fn write_line(&mut self, severity: Severity, line: &[u8]) -> io::Result<()> {
        match self {
            Destination::Split => match severity.default_stream() {
                Stream::Stdout => {
                    let mut out = io::stdout().lock();
                    out.write_all(line)?;
                    out.flush()
                }
                Stream::Stderr => {
                    let mut err = io::stderr().lock();
                    err.write_all(line)?;
                    err.flush()
                }
            },
            Destination::Shared(writer) => {
                writer.write_all(line)?;
                writer.flush()
            }
        }
    }
}

impl std::fmt::Debug for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Split => f.write_str("Split"),
            Destination::Shared(_) => f.write_str("Shared(..)"),
        }
    }
}

/// Cloneable in-memory destination
///
/// Every clone appends to the same buffer, so a test can hand one clone to the
/// logger and read the output back through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.bytes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Contents as (lossy) UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_buffer_clones_share_storage() {
        let buffer = MemoryBuffer::new();
        let mut writer = buffer.clone();

        writer.write_all(b"abc").unwrap();
        assert_eq!(buffer.contents(), "abc");
        assert_eq!(buffer.len(), 3);

        buffer.clear();
        assert!(writer.is_empty());
    }

    #[test]
    fn test_shared_destination_ignores_severity() {
        let buffer = MemoryBuffer::new();
        let mut dest = Destination::writer(buffer.clone());

        dest.write_line(Severity::Info, b"one\n").unwrap();
        dest.write_line(Severity::Fatal, b"two\n").unwrap();
        assert_eq!(buffer.contents(), "one\ntwo\n");
    }

    #[test]
    fn test_open_file_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/app.log");

        let mut dest = Destination::open_file(&path, true).unwrap();
        dest.write_line(Severity::Error, b"ERROR: x\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "ERROR: x\n");
    }

    #[test]
    fn test_open_file_append_vs_truncate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        fs::write(&path, "old\n").unwrap();

        let mut dest = Destination::open_file(&path, true).unwrap();
        dest.write_line(Severity::Info, b"new\n").unwrap();
        drop(dest);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\nnew\n");

        let mut dest = Destination::open_file(&path, false).unwrap();
        dest.write_line(Severity::Info, b"fresh\n").unwrap();
        drop(dest);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_open_file_reports_path_on_failure() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened as a log file
        let err = Destination::open_file(temp_dir.path(), true).unwrap_err();
        assert!(err.to_string().contains(&temp_dir.path().display().to_string()));
    }

    #[test]
    fn test_write_entry_renders_full_line() {
        let buffer = MemoryBuffer::new();
        let dest = Mutex::new(Destination::writer(buffer.clone()));

        write_entry(&dest, &LogEntry::new(Severity::Warning, "low disk"));

        let out = buffer.contents();
        assert!(out.starts_with("WARNING: "));
        assert!(out.ends_with(" low disk\n"));
        assert_eq!(out.lines().count(), 1);
    }
}
