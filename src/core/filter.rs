//! Filter chat entries by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering entry collections before their bodies are
//! counted.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Entries on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Entries on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Entries from one participant |
//!
//! # Example
//!
//! ```
//! use wordstorm::core::filter::{FilterConfig, apply_filters};
//! use wordstorm::ChatEntry;
//!
//! let entries = vec![
//!     ChatEntry::new("Alice", "Hello"),
//!     ChatEntry::new("Bob", "Hi there"),
//!     ChatEntry::new("Alice", "How are you?"),
//! ];
//!
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(entries, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Entries without timestamps are **excluded** when date filters are active
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::ChatEntry;
use crate::error::{Result, WordstormError};

/// Configuration for filtering entries by date and sender.
///
/// ```
/// use wordstorm::core::filter::FilterConfig;
///
/// # fn main() -> wordstorm::Result<()> {
/// let combined = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2024-06-01")?
///     .with_date_to("2024-12-31")?;
///
/// assert!(combined.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only entries on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only entries on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Include only entries from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive), `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`WordstormError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_day_bound(date_str, (0, 0, 0))?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive), `YYYY-MM-DD`.
    ///
    /// The whole day is included, up to 23:59:59.
    ///
    /// # Errors
    ///
    /// Returns [`WordstormError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_day_bound(date_str, (23, 59, 59))?);
        Ok(self)
    }

    /// Sets the sender filter.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `entry` passes every active filter.
    pub fn matches(&self, entry: &ChatEntry) -> bool {
        if let Some(ref from) = self.from {
            if !entry.sender.eq_ignore_ascii_case(from) {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(ts) = entry.timestamp else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

/// Parses `YYYY-MM-DD` and pins it to the given time of day.
fn parse_day_bound(date_str: &str, (h, m, s): (u32, u32, u32)) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(h, m, s))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| WordstormError::invalid_date(date_str))
}

/// Keeps only entries that match all active filters.
///
/// If no filters are active, the input is returned unchanged.
pub fn apply_filters(entries: Vec<ChatEntry>, config: &FilterConfig) -> Vec<ChatEntry> {
    if !config.is_active() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| config.matches(entry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_entry(sender: &str, body: &str, ts: Option<&str>) -> ChatEntry {
        let mut entry = ChatEntry::new(sender, body);
        if let Some(ts_str) = ts {
            let naive = NaiveDate::parse_from_str(ts_str, "%Y-%m-%d").unwrap();
            entry.timestamp = Some(naive.and_hms_opt(12, 0, 0).unwrap().and_utc());
        }
        entry
    }

    #[test]
    fn test_filter_by_sender() {
        let entries = vec![
            make_entry("Alice", "Hello", None),
            make_entry("Bob", "Hi", None),
            make_entry("alice", "Bye", None),
        ];

        let filtered = apply_filters(entries, &FilterConfig::new().with_sender("Alice"));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.sender.eq_ignore_ascii_case("Alice")));
    }

    #[test]
    fn test_filter_by_date_after() {
        let entries = vec![
            make_entry("Alice", "Old", Some("2024-01-01")),
            make_entry("Alice", "New", Some("2024-06-15")),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(entries, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "New");
    }

    #[test]
    fn test_filter_by_date_before_is_inclusive() {
        let entries = vec![
            make_entry("Alice", "Old", Some("2024-01-01")),
            make_entry("Alice", "New", Some("2024-06-15")),
        ];

        let config = FilterConfig::new().with_date_to("2024-01-01").unwrap();
        let filtered = apply_filters(entries, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "Old");
    }

    #[test]
    fn test_no_timestamp_excluded_when_date_filter() {
        let entries = vec![
            make_entry("Alice", "With date", Some("2024-06-15")),
            make_entry("Alice", "No date", None),
        ];

        let config = FilterConfig::new().with_date_from("2024-01-01").unwrap();
        let filtered = apply_filters(entries, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "With date");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(WordstormError::InvalidDate { .. })));
    }

    #[test]
    fn test_inactive_filter_passes_everything() {
        let entries = vec![make_entry("Alice", "a", None), make_entry("Bob", "b", None)];
        let filtered = apply_filters(entries.clone(), &FilterConfig::new());
        assert_eq!(filtered, entries);
    }

    #[test]
    fn test_combined_filters() {
        let entries = vec![
            make_entry("Alice", "Old Alice", Some("2024-01-01")),
            make_entry("Alice", "New Alice", Some("2024-06-15")),
            make_entry("Bob", "New Bob", Some("2024-06-15")),
        ];

        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_sender("Alice");

        let filtered = apply_filters(entries, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body, "New Alice");
    }

    #[test]
    fn test_with_datetime_directly() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let config = FilterConfig::new().with_after(dt).with_before(dt);
        assert_eq!(config.after, Some(dt));
        assert_eq!(config.before, Some(dt));
        assert!(config.has_date_filter());
    }
}
