//! End-to-end processing: raw lines in, frequency table and word cloud out.
//!
//! Every run is driven by an explicit [`PipelineConfig`]; nothing is read from
//! global state and nothing persists between runs.
//!
//! ```text
//! lines ─▶ extract ─▶ filter ─▶ messages ─┬─▶ top words ─▶ table
//!                                          └─▶ cloud weights ─▶ render ─▶ PNG
//! ```
//!
//! # Example
//!
//! ```rust
//! use wordstorm::config::CloudConfig;
//! use wordstorm::pipeline::{PipelineConfig, run_pipeline};
//!
//! # fn main() -> wordstorm::Result<()> {
//! let lines = [
//!     "3/14/23, 9:05 PM - Alice: pizza tonight?",
//!     "3/14/23, 9:06 PM - Bob: pizza sounds great",
//! ];
//! let config = PipelineConfig::new().with_cloud(CloudConfig::new().with_seed(3));
//!
//! let report = run_pipeline(lines, &config)?;
//! assert_eq!(report.messages.len(), 2);
//! assert_eq!(report.table[0].word, "pizza");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::ChatEntry;
use crate::config::{CloudConfig, DEFAULT_TOP_N, ExtractConfig};
use crate::core::extract::Extractor;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::frequency::{WordCount, top_words};
use crate::error::{Result, WordstormError};
use crate::render::{RenderParams, WordCloud};

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// How lines become messages
    pub extract: ExtractConfig,
    /// Which messages are kept
    pub filter: FilterConfig,
    /// How the cloud is drawn
    pub cloud: CloudConfig,
    /// Rows in the frequency table
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extract: ExtractConfig::default(),
            filter: FilterConfig::default(),
            cloud: CloudConfig::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl PipelineConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_extract(mut self, extract: ExtractConfig) -> Self {
        self.extract = extract;
        self
    }

    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn with_cloud(mut self, cloud: CloudConfig) -> Self {
        self.cloud = cloud;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}

/// Counts collected along the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Raw lines read
    pub lines: usize,
    /// Messages recognized before filtering
    pub extracted: usize,
    /// Messages left after filtering
    pub kept: usize,
}

impl PipelineStats {
    /// Percentage of raw lines that turned into kept messages.
    pub fn yield_ratio(&self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            self.kept as f64 / self.lines as f64 * 100.0
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct CloudReport {
    /// Message bodies that were counted, in chat order
    pub messages: Vec<String>,
    /// Top words with counts, most frequent first
    pub table: Vec<WordCount>,
    /// The rendered cloud
    pub cloud: WordCloud,
    /// Line and message counts
    pub stats: PipelineStats,
}

/// Runs extraction, filtering, counting and rendering over `lines`.
///
/// # Errors
///
/// - [`WordstormError::InvalidSeed`] if the seed is out of range
/// - [`WordstormError::NoMessages`] if no message survives extraction and
///   filtering
/// - [`WordstormError::EmptyCloud`] if the messages hold nothing drawable
pub fn run_pipeline<I, S>(lines: I, config: &PipelineConfig) -> Result<CloudReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.cloud.validate()?;

    let mut line_count = 0usize;
    let counted = lines.into_iter().inspect(|_| line_count += 1);
    let entries = Extractor::with_config(config.extract.clone()).extract_entries(counted);
    let extracted = entries.len();

    let entries = apply_filters(entries, &config.filter);
    if config.filter.is_active() {
        debug!(before = extracted, after = entries.len(), "applied filters");
    }

    let stats = PipelineStats {
        lines: line_count,
        extracted,
        kept: entries.len(),
    };
    if entries.is_empty() {
        info!(lines = stats.lines, "no messages recognized");
        return Err(WordstormError::NoMessages);
    }

    let messages: Vec<String> = entries.into_iter().map(ChatEntry::into_body).collect();
    let table = top_words(&messages, config.top_n);
    debug!(rows = table.len(), "built frequency table");

    let cloud = RenderParams::from_config(&config.cloud).generate(&messages)?;

    info!(
        lines = stats.lines,
        messages = stats.kept,
        words = cloud.words().len(),
        "pipeline finished"
    );

    Ok(CloudReport {
        messages,
        table,
        cloud,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: &[&str] = &[
        "3/14/23, 9:00 PM - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
        "3/14/23, 9:05 PM - Alice: pizza tonight? 🍕",
        "3/14/23, 9:06 PM - Bob: pizza again, sure",
        "3/15/23, 8:00 AM - Alice: movie after pizza",
        "random garbage line",
    ];

    #[test]
    fn test_full_run() {
        let report = run_pipeline(CHAT, &PipelineConfig::new()).unwrap();

        assert_eq!(report.messages.len(), 3);
        assert_eq!(report.table[0], WordCount::new("pizza", 3));
        assert!(!report.cloud.words().is_empty());
        assert_eq!(
            report.stats,
            PipelineStats {
                lines: 5,
                extracted: 3,
                kept: 3
            }
        );
    }

    #[test]
    fn test_no_messages() {
        let lines = ["nothing here", "still nothing"];
        let err = run_pipeline(lines, &PipelineConfig::new()).unwrap_err();
        assert!(err.is_no_messages());
    }

    #[test]
    fn test_filters_apply_before_counting() {
        let config = PipelineConfig::new().with_filter(FilterConfig::new().with_sender("bob"));
        let report = run_pipeline(CHAT, &config).unwrap();
        assert_eq!(report.messages, vec!["pizza again, sure".to_string()]);
        assert_eq!(report.stats.kept, 1);
    }

    #[test]
    fn test_filter_removing_everything_is_no_messages() {
        let config = PipelineConfig::new().with_filter(FilterConfig::new().with_sender("carol"));
        assert!(run_pipeline(CHAT, &config).unwrap_err().is_no_messages());
    }

    #[test]
    fn test_invalid_seed_rejected_first() {
        let config = PipelineConfig::new().with_cloud(CloudConfig::new().with_seed(0));
        let err = run_pipeline(CHAT, &config).unwrap_err();
        assert!(matches!(err, WordstormError::InvalidSeed { seed: 0, .. }));
    }

    #[test]
    fn test_emoji_only_messages_give_empty_cloud() {
        let lines = ["3/14/23, 9:05 PM - Alice: 😀😀", "3/14/23, 9:06 PM - Bob: 🎉"];
        let err = run_pipeline(lines, &PipelineConfig::new()).unwrap_err();
        assert!(matches!(err, WordstormError::EmptyCloud));
    }

    #[test]
    fn test_top_n() {
        let report = run_pipeline(CHAT, &PipelineConfig::new().with_top_n(1)).unwrap();
        assert_eq!(report.table.len(), 1);
    }

    #[test]
    fn test_yield_ratio() {
        let stats = PipelineStats {
            lines: 4,
            extracted: 2,
            kept: 1,
        };
        assert!((stats.yield_ratio() - 25.0).abs() < f64::EPSILON);
        assert!(PipelineStats::default().yield_ratio().abs() < f64::EPSILON);
    }
}
