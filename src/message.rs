//! Structured chat line type.
//!
//! A [`ChatEntry`] is one matched line of a chat export: who wrote it, when,
//! and the message body. The word-frequency pipeline itself only looks at the
//! bodies; sender and timestamp exist so that entries can be filtered first.
//!
//! ```
//! use wordstorm::ChatEntry;
//! use chrono::{TimeZone, Utc};
//!
//! let entry = ChatEntry::new("Alice", "good morning!!")
//!     .with_timestamp(Utc.with_ymd_and_hms(2023, 3, 14, 21, 5, 0).unwrap());
//!
//! assert_eq!(entry.sender(), "Alice");
//! assert_eq!(entry.body(), "good morning!!");
//! assert!(entry.timestamp.is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One chat message with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    /// Sender label as written in the export.
    pub sender: String,

    /// Trimmed message body.
    ///
    /// Contains `'\n'` only when continuation lines were joined.
    pub body: String,

    /// When the message was sent, if the export date could be parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatEntry {
    /// Creates an entry without a timestamp.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
        }
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Sets the timestamp from an `Option`.
    #[must_use]
    pub fn with_timestamp_opt(mut self, ts: Option<DateTime<Utc>>) -> Self {
        self.timestamp = ts;
        self
    }

    /// Returns the sender label.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consumes the entry and returns its body.
    pub fn into_body(self) -> String {
        self.body
    }
}
