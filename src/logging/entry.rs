//! Log entries and the text line format

use chrono::{DateTime, Local};

use super::severity::Severity;

/// Timestamp layout used in text lines: `YYYY/MM/DD HH:MM:SS.ffffff`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// A single log record
///
/// Entries are what channel consumers receive. The message holds only the
/// formatted user text; prefix and timestamp are rendered separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time the call was made
    pub timestamp: DateTime<Local>,
    /// Severity of the call
    pub severity: Severity,
    /// Formatted message
    pub message: String,
}

impl LogEntry {
    /// Create a new entry stamped with the current local time
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self::at(Local::now(), severity, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(timestamp: DateTime<Local>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            severity,
            message: message.into(),
        }
    }

    /// Render the entry as a newline-terminated text line
    pub fn render(&self) -> String {
        format!(
            "{}{} {}\n",
            self.severity.prefix(),
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_layout() {
        let ts = Local
            .with_ymd_and_hms(2026, 1, 21, 14, 30, 45)
            .single()
            .unwrap();
        let entry = LogEntry::at(ts, Severity::Error, "disk full");
        assert_eq!(entry.render(), "ERROR: 2026/01/21 14:30:45.000000 disk full\n");
    }

    #[test]
    fn test_render_keeps_microseconds() {
        let ts = Local
            .with_ymd_and_hms(2026, 3, 2, 8, 5, 9)
            .single()
            .unwrap()
            + chrono::Duration::microseconds(42);
        let entry = LogEntry::at(ts, Severity::Warning, "slow");
        assert_eq!(entry.render(), "WARNING: 2026/03/02 08:05:09.000042 slow\n");
    }

    #[test]
    fn test_message_has_no_decoration() {
        let entry = LogEntry::new(Severity::Info, "hello world");
        assert_eq!(entry.message, "hello world");
        assert!(entry.render().starts_with("INFO: "));
        assert!(entry.render().ends_with(" hello world\n"));
    }
}
