//! Frequency table formats for the wordstorm library.
//!
//! Library-first format types that don't depend on CLI frameworks.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn example() -> wordstorm::Result<()> {
//! use wordstorm::format::{TableFormat, to_format_string};
//! use wordstorm::core::frequency::WordCount;
//!
//! let table = vec![WordCount::new("pizza", 3)];
//! let csv = to_format_string(&table, TableFormat::Csv)?;
//! assert!(csv.contains("pizza;3"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::frequency::WordCount;
use crate::error::{Result, WordstormError};

/// How the frequency table is printed or saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum TableFormat {
    /// Aligned columns for the terminal
    #[default]
    Text,

    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of `{word, count}` objects
    Json,
}

impl TableFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            TableFormat::Text => "txt",
            TableFormat::Csv => "csv",
            TableFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "csv", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [TableFormat] {
        &[TableFormat::Text, TableFormat::Csv, TableFormat::Json]
    }

    /// Returns the feature a format needs, if any.
    fn required_feature(self) -> Option<&'static str> {
        match self {
            TableFormat::Text => None,
            TableFormat::Csv => Some("csv-output"),
            TableFormat::Json => Some("json-output"),
        }
    }
}

impl std::fmt::Display for TableFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableFormat::Text => write!(f, "Text"),
            TableFormat::Csv => write!(f, "CSV"),
            TableFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for TableFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "table" => Ok(TableFormat::Text),
            "csv" => Ok(TableFormat::Csv),
            "json" => Ok(TableFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                TableFormat::all_names().join(", ")
            )),
        }
    }
}

/// Converts the frequency table to a string in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is not enabled.
#[allow(unused_variables)]
pub fn to_format_string(table: &[WordCount], format: TableFormat) -> Result<String> {
    match format {
        TableFormat::Text => Ok(crate::core::output::to_text(table)),
        #[cfg(feature = "csv-output")]
        TableFormat::Csv => crate::core::output::to_csv(table),
        #[cfg(feature = "json-output")]
        TableFormat::Json => crate::core::output::to_json(table),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Writes the frequency table to a file in the given format.
pub fn write_to_format(
    table: &[WordCount],
    path: impl AsRef<Path>,
    format: TableFormat,
) -> Result<()> {
    let content = to_format_string(table, format)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn missing_feature(format: TableFormat) -> WordstormError {
    WordstormError::FeatureDisabled {
        what: format!("Table format {format}"),
        feature: format.required_feature().unwrap_or("default"),
    }
}
