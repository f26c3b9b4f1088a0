//! Message extraction from raw chat-export lines.
//!
//! Recognized line format (US-style export with a 12-hour clock):
//!
//! ```text
//! 3/14/23, 9:05 PM - Alice: good morning!!
//! ```
//!
//! Lines containing the end-to-end encryption notice, lines without any `-`,
//! and lines that do not match the format are dropped without error.
//!
//! By default every physical line is matched on its own, so the continuation
//! lines of a multi-line message are lost. [`ExtractConfig::join_continuations`]
//! switches to a small state machine that appends those lines to the message
//! they belong to.
//!
//! # Example
//!
//! ```
//! use wordstorm::config::ExtractConfig;
//! use wordstorm::core::extract::extract_messages;
//!
//! let lines = [
//!     "3/14/23, 9:00 PM - Messages and calls are end-to-end encrypted.",
//!     "3/14/23, 9:05 PM - Alice: good morning!! 😀",
//!     "not a chat line",
//! ];
//!
//! let messages = extract_messages(lines, &ExtractConfig::new());
//! assert_eq!(messages, vec!["good morning!!".to_string()]);
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::{Captures, Regex};
use tracing::debug;

use crate::ChatEntry;
use crate::config::ExtractConfig;

/// Substring marking the encryption notice WhatsApp puts at the top of exports.
pub const ENCRYPTION_NOTICE: &str = "end-to-end encrypted";

/// Separator every message line contains between timestamp and sender.
pub const SEPARATOR: char = '-';

/// Full message line: date, 12-hour time, separator, sender, colon, body.
const MESSAGE_PATTERN: &str = r"^(?P<date>\d{1,2}/\d{1,2}/\d{2,4}), (?P<time>\d{1,2}:\d{2})\s(?P<meridiem>[APap][Mm])\s-\s(?P<sender>.+?):\s(?P<body>.+)";

/// Timestamp prefix alone; matches system lines such as "X added Y" too.
const TIMESTAMP_PREFIX_PATTERN: &str = r"^\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}:\d{2}\s[APap][Mm]\s-\s";

static MESSAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MESSAGE_PATTERN).expect("message pattern is valid"));

static TIMESTAMP_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TIMESTAMP_PREFIX_PATTERN).expect("timestamp prefix pattern is valid")
});

/// Extracts message bodies from chat-export lines.
///
/// Holds the extraction settings; the line patterns are compiled once per
/// process and shared.
///
/// # Example
///
/// ```
/// use wordstorm::config::ExtractConfig;
/// use wordstorm::core::extract::Extractor;
///
/// let extractor = Extractor::with_config(ExtractConfig::new().with_emojis(true));
/// let entries = extractor.extract_entries(["3/14/23, 9:05 PM - Alice: hi 😀"]);
///
/// assert_eq!(entries[0].sender(), "Alice");
/// assert_eq!(entries[0].body(), "hi 😀");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractConfig,
}

/// Where the continuation state machine currently is.
#[derive(Debug)]
enum State {
    AwaitingMessage,
    AccumulatingBody(PendingEntry),
}

#[derive(Debug)]
struct PendingEntry {
    sender: String,
    body: String,
    timestamp: Option<DateTime<Utc>>,
}

impl Extractor {
    /// Creates an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an extractor with custom configuration.
    pub fn with_config(config: ExtractConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts message bodies only, in line order.
    pub fn extract_messages<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extract_entries(lines)
            .into_iter()
            .map(ChatEntry::into_body)
            .collect()
    }

    /// Extracts structured entries (sender, timestamp, body), in line order.
    pub fn extract_entries<I, S>(&self, lines: I) -> Vec<ChatEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.config.join_continuations {
            self.extract_joined(lines)
        } else {
            self.extract_per_line(lines)
        }
    }

    fn extract_per_line<I, S>(&self, lines: I) -> Vec<ChatEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let line = line.as_ref();
            if is_administrative(line) {
                skipped += 1;
                continue;
            }
            match MESSAGE_RE.captures(line) {
                Some(caps) => {
                    let pending = PendingEntry::from_captures(&caps);
                    entries.push(self.finish(pending));
                }
                None => skipped += 1,
            }
        }

        debug!(
            messages = entries.len(),
            skipped, "extracted messages line by line"
        );
        entries
    }

    fn extract_joined<I, S>(&self, lines: I) -> Vec<ChatEntry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut state = State::AwaitingMessage;
        let mut continuations = 0usize;

        for line in lines {
            let line = line.as_ref();

            let is_notice = line.contains(ENCRYPTION_NOTICE);
            let caps = if is_notice {
                None
            } else {
                MESSAGE_RE.captures(line)
            };

            if let Some(caps) = caps {
                if let State::AccumulatingBody(pending) = state {
                    entries.push(self.finish(pending));
                }
                state = State::AccumulatingBody(PendingEntry::from_captures(&caps));
                continue;
            }

            // Notices and system lines with a timestamp end the current message.
            if is_notice || TIMESTAMP_PREFIX_RE.is_match(line) {
                if let State::AccumulatingBody(pending) = state {
                    entries.push(self.finish(pending));
                }
                state = State::AwaitingMessage;
                continue;
            }

            if let State::AccumulatingBody(pending) = &mut state {
                if !line.trim().is_empty() {
                    pending.body.push('\n');
                    pending.body.push_str(line.trim_end());
                    continuations += 1;
                }
            }
        }

        if let State::AccumulatingBody(pending) = state {
            entries.push(self.finish(pending));
        }

        debug!(
            messages = entries.len(),
            continuations, "extracted messages with continuation lines"
        );
        entries
    }

    fn finish(&self, pending: PendingEntry) -> ChatEntry {
        let body = clean_body(&pending.body, self.config.include_emojis);
        ChatEntry::new(pending.sender, body).with_timestamp_opt(pending.timestamp)
    }
}

impl PendingEntry {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let field = |name: &str| caps.name(name).map_or("", |m| m.as_str());
        Self {
            sender: field("sender").to_string(),
            body: field("body").to_string(),
            timestamp: parse_timestamp(field("date"), field("time"), field("meridiem")),
        }
    }
}

/// Extracts message bodies with a default [`Extractor`] built from `config`.
pub fn extract_messages<I, S>(lines: I, config: &ExtractConfig) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Extractor::with_config(config.clone()).extract_messages(lines)
}

/// Extracts structured entries with a default [`Extractor`] built from `config`.
pub fn extract_entries<I, S>(lines: I, config: &ExtractConfig) -> Vec<ChatEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Extractor::with_config(config.clone()).extract_entries(lines)
}

/// Returns `true` for lines that can never carry a message.
pub fn is_administrative(line: &str) -> bool {
    line.contains(ENCRYPTION_NOTICE) || !line.contains(SEPARATOR)
}

/// Trims a captured body and, unless emojis are kept, strips emoji glyphs.
fn clean_body(raw: &str, include_emojis: bool) -> String {
    let trimmed = raw.trim();
    if include_emojis {
        trimmed.to_string()
    } else {
        strip_emojis(trimmed).trim().to_string()
    }
}

/// Checks whether a character lies in one of the stripped emoji blocks.
///
/// Covered blocks: emoticons, miscellaneous symbols and pictographs,
/// transport and map symbols, and regional indicators (flags).
pub fn is_emoji(c: char) -> bool {
    matches!(
        c as u32,
        0x1F600..=0x1F64F // Emoticons
            | 0x1F300..=0x1F5FF // Symbols & Pictographs
            | 0x1F680..=0x1F6FF // Transport & Map
            | 0x1F1E0..=0x1F1FF // Regional Indicators (flags)
    )
}

/// Removes emoji glyphs from text; everything else is kept verbatim.
pub fn strip_emojis(text: &str) -> String {
    text.chars().filter(|c| !is_emoji(*c)).collect()
}

/// Parses a US-style export timestamp such as `3/14/23` + `9:05` + `PM`.
///
/// Month/day order is tried first, then day/month for locales whose exports
/// reuse the slash layout. Returns `None` when neither reading is a real date.
pub fn parse_timestamp(date_str: &str, time_str: &str, meridiem: &str) -> Option<DateTime<Utc>> {
    let year_digits = date_str.rsplit('/').next().map_or(0, str::len);
    let formats: &[&str] = if year_digits == 2 {
        &["%m/%d/%y, %I:%M %p", "%d/%m/%y, %I:%M %p"]
    } else {
        &["%m/%d/%Y, %I:%M %p", "%d/%m/%Y, %I:%M %p"]
    };

    let datetime_str = format!("{date_str}, {time_str} {}", meridiem.to_uppercase());

    formats.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(&datetime_str, format)
            .ok()
            .map(|naive| naive.and_utc())
    })
}
