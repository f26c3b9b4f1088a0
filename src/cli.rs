//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ThemeArg`] - Theme choices as shown on the command line
//! - [`TableArg`] - Frequency table formats as shown on the command line
//!
//! Both value enums convert into their library counterparts, so the library
//! itself never depends on clap.
//!
//! ```rust
//! use wordstorm::cli::{TableArg, ThemeArg};
//! use wordstorm::config::Theme;
//! use wordstorm::format::TableFormat;
//!
//! assert_eq!(Theme::from(ThemeArg::Dark), Theme::Dark);
//! assert_eq!(TableFormat::from(TableArg::Csv), TableFormat::Csv);
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{CloudConfig, DEFAULT_IMAGE_NAME, DEFAULT_TOP_N, ExtractConfig, Theme};
use crate::core::filter::FilterConfig;
use crate::error::Result;
use crate::format::TableFormat;
use crate::pipeline::PipelineConfig;

/// Turn a WhatsApp chat export into a word cloud and a table of the most
/// used words.
#[derive(Parser, Debug, Clone)]
#[command(name = "wordstorm")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wordstorm \"WhatsApp Chat with Alice.txt\"
    wordstorm chat.zip --theme dark --seed 42
    wordstorm chat.txt --no-freq --include-emojis -o cloud.png
    wordstorm chat.txt --table csv --top 50 > words.csv
    wordstorm chat.txt --from Alice --after 2024-01-01")]
pub struct Args {
    /// Path to the exported chat (.txt or .zip)
    pub input: PathBuf,

    /// Color theme of the cloud
    #[arg(long, value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Keep emojis in messages
    #[arg(long)]
    pub include_emojis: bool,

    /// Weight the cloud by processed text instead of raw word counts
    #[arg(long)]
    pub no_freq: bool,

    /// Layout seed (1-100); a random one is picked and printed when omitted
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=100))]
    pub seed: Option<u64>,

    /// Where to write the PNG image
    #[arg(short, long, default_value = DEFAULT_IMAGE_NAME)]
    pub output: PathBuf,

    /// Format of the frequency table printed to stdout
    #[arg(long, value_enum, default_value_t = TableArg::Text)]
    pub table: TableArg,

    /// Number of rows in the frequency table
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this participant
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Append continuation lines of multi-line messages to their message
    #[arg(long)]
    pub join_continuations: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only print the table and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Builds the filter from `--after`, `--before` and `--from`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordstormError::InvalidDate`] for malformed dates.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            filter = filter.with_sender(from.clone());
        }
        Ok(filter)
    }

    /// Builds the full pipeline configuration with the resolved seed.
    pub fn pipeline_config(&self, seed: u64) -> Result<PipelineConfig> {
        let extract = ExtractConfig::new()
            .with_emojis(self.include_emojis)
            .with_join_continuations(self.join_continuations);
        let cloud = CloudConfig::new()
            .with_theme(self.theme.into())
            .with_frequency_mode(!self.no_freq)
            .with_seed(seed);

        Ok(PipelineConfig::new()
            .with_extract(extract)
            .with_filter(self.filter_config()?)
            .with_cloud(cloud)
            .with_top_n(self.top))
    }
}

/// Theme choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeArg {
    /// White background, plasma colors
    #[default]
    Light,
    /// Near-black background, viridis colors
    Dark,
    /// Soft pink background, plasma colors
    Pastel,
}

impl std::fmt::Display for ThemeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Theme::from(*self))
    }
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Theme {
        match theme {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Pastel => Theme::Pastel,
        }
    }
}

/// Frequency table formats on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableArg {
    /// Aligned columns
    #[default]
    #[value(alias = "table")]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array
    Json,
}

impl std::fmt::Display for TableArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", TableFormat::from(*self))
    }
}

impl From<TableArg> for TableFormat {
    fn from(format: TableArg) -> TableFormat {
        match format {
            TableArg::Text => TableFormat::Text,
            TableArg::Csv => TableFormat::Csv,
            TableArg::Json => TableFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wordstorm").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["chat.txt"]).unwrap();
        assert_eq!(args.input, PathBuf::from("chat.txt"));
        assert_eq!(args.theme, ThemeArg::Light);
        assert_eq!(args.table, TableArg::Text);
        assert_eq!(args.output, PathBuf::from("wordcloud.png"));
        assert_eq!(args.top, 20);
        assert_eq!(args.seed, None);
        assert!(!args.include_emojis && !args.no_freq && !args.quiet);
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_seed_range_enforced() {
        assert_eq!(parse(&["c.txt", "--seed", "100"]).unwrap().seed, Some(100));
        assert!(parse(&["c.txt", "--seed", "0"]).is_err());
        assert!(parse(&["c.txt", "--seed", "101"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&["c.txt", "-v"]).unwrap().log_level(), "info");
        assert_eq!(parse(&["c.txt", "-vv"]).unwrap().log_level(), "debug");
        assert_eq!(parse(&["c.txt", "-vvvv"]).unwrap().log_level(), "trace");
    }

    #[test]
    fn test_pipeline_config() {
        let args = parse(&[
            "c.txt",
            "--theme",
            "dark",
            "--no-freq",
            "--include-emojis",
            "--join-continuations",
            "--from",
            "Alice",
            "--top",
            "5",
        ])
        .unwrap();
        let config = args.pipeline_config(17).unwrap();

        assert_eq!(config.cloud.theme, Theme::Dark);
        assert!(!config.cloud.use_freq);
        assert_eq!(config.cloud.random_seed, 17);
        assert!(config.extract.include_emojis);
        assert!(config.extract.join_continuations);
        assert_eq!(config.filter.from.as_deref(), Some("Alice"));
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_bad_date_is_error() {
        let args = parse(&["c.txt", "--after", "yesterday"]).unwrap();
        assert!(args.pipeline_config(1).unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_value_enum_conversions() {
        assert_eq!(Theme::from(ThemeArg::Pastel), Theme::Pastel);
        assert_eq!(TableFormat::from(TableArg::Json), TableFormat::Json);
        assert_eq!(ThemeArg::Dark.to_string(), "dark");
        assert_eq!(TableArg::Csv.to_string(), "CSV");
        assert_eq!(parse(&["c.txt", "--table", "table"]).unwrap().table, TableArg::Text);
    }

    #[test]
    fn test_theme_arg_serde() {
        let json = serde_json::to_string(&ThemeArg::Pastel).unwrap();
        assert_eq!(json, "\"pastel\"");
    }
}
