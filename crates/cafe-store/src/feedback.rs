//! # Feedback Log
//!
//! Free-text customer feedback, one line per entry in `feedback.txt`:
//!
//! ```text
//! [2026-10-14 13:10:02] Ayesha: Loved the Mango Tango
//! ```

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::log::TIMESTAMP_FORMAT;

/// Shown when the customer leaves the name blank.
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone)]
pub struct FeedbackLog {
    path: PathBuf,
}

impl FeedbackLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FeedbackLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entry and returns the line as written (without newline).
    pub fn append(&self, name: &str, message: &str, at: DateTime<Local>) -> StoreResult<String> {
        let message = single_line(message);
        if message.is_empty() {
            return Err(StoreError::EmptyFeedback);
        }
        let name = match single_line(name) {
            n if n.is_empty() => ANONYMOUS.to_string(),
            n => n,
        };

        let line = format!("[{}] {}: {}", at.format(TIMESTAMP_FORMAT), name, message);
        let fail = |e| StoreError::persistence(&self.path, e);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(fail)?;
        writeln!(file, "{}", line).map_err(fail)?;
        file.flush().map_err(fail)?;

        info!(customer = %name, "Feedback recorded");
        Ok(line)
    }

    /// Every entry, oldest first.
    pub fn read_all(&self) -> StoreResult<Vec<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No feedback file yet");
                return Err(StoreError::not_found("feedback", &self.path));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(contents
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect())
    }
}

/// Trims and folds line breaks into spaces so one entry stays one line.
fn single_line(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 14, 13, 10, 2).single().unwrap()
    }

    #[test]
    fn test_append_and_read_all() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.txt"));

        let line = log.append("Ayesha", "Loved the Mango Tango", at()).unwrap();
        assert_eq!(line, "[2026-10-14 13:10:02] Ayesha: Loved the Mango Tango");
        log.append("Bilal", "Chai was great", at()).unwrap();

        let entries = log.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], line);
        assert!(entries[1].ends_with("Bilal: Chai was great"));
    }

    #[test]
    fn test_newlines_are_folded() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.txt"));

        log.append("Sara", "line one\nline two", at()).unwrap();
        assert_eq!(log.read_all().unwrap(), ["[2026-10-14 13:10:02] Sara: line one line two"]);
    }

    #[test]
    fn test_empty_message_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.txt"));

        assert!(matches!(log.append("Sara", "   ", at()), Err(StoreError::EmptyFeedback)));
        assert!(!log.path().exists());
    }

    #[test]
    fn test_blank_name_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.txt"));

        let line = log.append("", "Nice place", at()).unwrap();
        assert!(line.ends_with("Anonymous: Nice place"));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let log = FeedbackLog::new(dir.path().join("feedback.txt"));

        assert!(matches!(log.read_all(), Err(StoreError::NotFound { .. })));
    }
}
