//! # Wordstorm
//!
//! A Rust library for turning exported WhatsApp chats into word clouds and
//! word-frequency tables.
//!
//! ## Overview
//!
//! Wordstorm reads the plain-text transcript a phone produces with
//! "Export chat" (optionally zipped), pulls the message bodies out of the
//! timestamped lines, and then:
//!
//! - counts the most frequent meaningful words (stop-words and very short
//!   tokens removed)
//! - lays those words out on a 1000 × 500 canvas, sized by weight, and
//!   encodes the result as PNG
//!
//! Every run is a pure function of its input lines and an explicit
//! configuration. The layout seed makes images reproducible byte for byte.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wordstorm::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let lines = read_input("WhatsApp Chat with Alice.zip")?;
//!
//!     let config = PipelineConfig::new()
//!         .with_cloud(CloudConfig::new().with_theme(Theme::Dark).with_seed(42));
//!     let report = run_pipeline(lines, &config)?;
//!
//!     for row in &report.table {
//!         println!("{}: {}", row.word, row.count);
//!     }
//!     report.cloud.save_png("wordcloud.png")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Step by Step
//!
//! ```rust
//! use wordstorm::config::ExtractConfig;
//! use wordstorm::core::{extract_messages, word_frequencies};
//!
//! let lines = [
//!     "3/14/23, 9:00 PM - Messages and calls are end-to-end encrypted.",
//!     "3/14/23, 9:05 PM - Alice: good morning!! 😀",
//!     "3/14/23, 9:06 PM - Bob: morning",
//! ];
//!
//! let messages = extract_messages(lines, &ExtractConfig::new());
//! assert_eq!(messages, vec!["good morning!!", "morning"]);
//!
//! let table = word_frequencies(&messages);
//! assert_eq!(table[0].word, "morning");
//! assert_eq!(table[0].count, 2);
//! ```
//!
//! ## Module Structure
//!
//! - [`input`] - Reading `.txt` and `.zip` exports
//! - [`core`] - Extraction, filtering, counting, table writers
//!   - [`core::extract`] - [`Extractor`](core::extract::Extractor), [`extract_messages`](core::extract_messages)
//!   - [`core::frequency`] - [`WordCount`](core::WordCount), [`word_frequencies`](core::word_frequencies)
//!   - [`core::filter`] - [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//! - [`render`] - Word-cloud layout and PNG encoding
//! - [`pipeline`] - [`run_pipeline`](pipeline::run_pipeline) over a [`PipelineConfig`](pipeline::PipelineConfig)
//! - [`config`] - [`ExtractConfig`](config::ExtractConfig), [`CloudConfig`](config::CloudConfig), [`Theme`](config::Theme)
//! - [`format`] - Frequency table formats
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`WordstormError`], [`Result`])
//! - [`prelude`] - Convenient re-exports
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `archive` | Reading `.zip` exports |
//! | `csv-output` | CSV frequency tables |
//! | `json-output` | JSON frequency tables |
//! | `cli` | The `wordstorm` binary |
//! | `full` | All of the above (default) |

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod input;
pub mod message;
pub mod pipeline;
pub mod render;

// Re-export the main types at the crate root for convenience
pub use error::{Result, WordstormError};
pub use message::ChatEntry;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use wordstorm::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ChatEntry;

    pub use crate::error::{Result, WordstormError};

    pub use crate::config::{CloudConfig, ExtractConfig, Theme};

    pub use crate::core::extract::{Extractor, extract_entries, extract_messages};
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::frequency::{WordCount, cloud_frequencies, top_words, word_frequencies};

    pub use crate::format::{TableFormat, to_format_string, write_to_format};
    pub use crate::input::read_input;
    pub use crate::pipeline::{CloudReport, PipelineConfig, run_pipeline};
    pub use crate::render::{RenderParams, WordCloud, render_cloud};
}
