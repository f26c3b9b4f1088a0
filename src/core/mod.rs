//! Core processing logic for wordstorm.
//!
//! This module contains:
//! - [`extract`] - Pulling message bodies out of raw export lines
//! - [`filter`] - Entry filtering by date and sender
//! - [`frequency`] - Word counting for the table and the cloud
//! - [`stopwords`] - The English stop-word list
//! - [`output`] - Table writers (text, CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use wordstorm::core::{extract_messages, word_frequencies};
//! use wordstorm::config::ExtractConfig;
//!
//! let lines = ["3/14/23, 9:05 PM - Alice: pizza tonight?"];
//! let messages = extract_messages(lines, &ExtractConfig::default());
//! let table = word_frequencies(&messages);
//! assert_eq!(table[0].word, "pizza");
//! ```

pub mod extract;
pub mod filter;
pub mod frequency;
pub mod output;
pub mod stopwords;

pub use extract::{Extractor, extract_entries, extract_messages, strip_emojis};
pub use filter::{FilterConfig, apply_filters};
pub use frequency::{WordCount, cloud_frequencies, top_words, word_frequencies};
pub use stopwords::is_stopword;

pub use crate::ChatEntry;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::to_text;
