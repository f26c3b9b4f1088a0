//! Unified error types for wordstorm.
//!
//! Every fallible operation in the library returns [`WordstormError`] through
//! the crate-wide [`Result`] alias, so callers can match on a single enum.
//!
//! Two variants are "soft" failures that an interactive front end reports as
//! warnings rather than errors:
//!
//! - [`WordstormError::NoMessages`] - no line matched the export format
//! - [`WordstormError::EmptyCloud`] - messages were found but none can be drawn
//!
//! An archive without a `.txt` entry ([`WordstormError::NoTextInArchive`]) is
//! a regular error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for wordstorm operations.
///
/// # Example
///
/// ```rust
/// use wordstorm::error::Result;
///
/// fn my_function() -> Result<Vec<String>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WordstormError>;

/// The error type for all wordstorm operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordstormError {
    /// An I/O error occurred while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The archive could not be opened or one of its entries could not be read.
    #[cfg(feature = "archive")]
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive does not contain any `.txt` entry.
    #[error("No .txt file found in ZIP{}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    NoTextInArchive {
        /// The archive path, if known
        path: Option<PathBuf>,
    },

    /// The input was given in a form this build cannot read.
    #[error("Unsupported input '{}': {reason}", path.display())]
    UnsupportedInput {
        /// The offending path
        path: PathBuf,
        /// Why it cannot be read
        reason: &'static str,
    },

    /// The requested operation needs a cargo feature that is disabled.
    #[error("{what} requires the '{feature}' feature to be enabled")]
    FeatureDisabled {
        /// What was requested
        what: String,
        /// The missing feature
        feature: &'static str,
    },

    /// Input text is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// No line of the input produced a message.
    #[error("No valid messages found")]
    NoMessages,

    /// Messages were found, but none of their words could be drawn.
    #[error("No words left to draw in the word cloud")]
    EmptyCloud,

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Layout seed outside the accepted range.
    #[error("Invalid seed {seed}. Expected a value in {min}..={max}")]
    InvalidSeed {
        /// The rejected seed
        seed: u64,
        /// Smallest accepted seed
        min: u64,
        /// Largest accepted seed
        max: u64,
    },

    /// PNG encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WordstormError {
    /// Creates an error for an archive without any `.txt` entry.
    pub fn no_text_in_archive(path: Option<PathBuf>) -> Self {
        WordstormError::NoTextInArchive { path }
    }

    /// Creates an unsupported-input error.
    pub fn unsupported_input(path: impl Into<PathBuf>, reason: &'static str) -> Self {
        WordstormError::UnsupportedInput {
            path: path.into(),
            reason,
        }
    }

    /// Creates a UTF-8 decoding error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        WordstormError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        WordstormError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WordstormError::Io(_))
    }

    /// Returns `true` if extraction produced no messages.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, WordstormError::NoMessages)
    }

    /// Returns `true` if the archive had no text entry.
    pub fn is_no_text_in_archive(&self) -> bool {
        matches!(self, WordstormError::NoTextInArchive { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, WordstormError::InvalidDate { .. })
    }

    /// Returns `true` for failures that should be shown as a warning
    /// instead of a hard error.
    pub fn is_user_warning(&self) -> bool {
        matches!(self, WordstormError::NoMessages | WordstormError::EmptyCloud)
    }
}
