//! Configuration types for extraction and rendering.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. Each value is built once per run
//! and passed explicitly into the pipeline.
//!
//! - [`ExtractConfig`] - how chat lines become messages
//! - [`CloudConfig`] - how messages become a word-cloud image
//! - [`Theme`] - background and palette selection
//!
//! # Example
//!
//! ```rust
//! use wordstorm::config::{CloudConfig, ExtractConfig, Theme};
//!
//! let extract = ExtractConfig::new().with_emojis(true);
//!
//! let cloud = CloudConfig::new()
//!     .with_theme(Theme::Dark)
//!     .with_frequency_mode(false)
//!     .with_seed(42);
//!
//! assert!(extract.include_emojis);
//! assert_eq!(cloud.theme.colormap(), "viridis");
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordstormError};

/// Accepted range for the layout seed.
pub const SEED_RANGE: RangeInclusive<u64> = 1..=100;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1000;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 500;

/// Number of rows in the frequency table.
pub const DEFAULT_TOP_N: usize = 20;

/// File name used for the rendered image.
pub const DEFAULT_IMAGE_NAME: &str = "wordcloud.png";

/// Color theme of the rendered cloud.
///
/// The theme picks both the background color and the colormap words are
/// painted with.
///
/// ```rust
/// use wordstorm::config::Theme;
///
/// assert_eq!(Theme::Light.background(), [0xff, 0xff, 0xff]);
/// assert_eq!(Theme::Pastel.colormap(), "plasma");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White background
    #[default]
    Light,
    /// Near-black background
    Dark,
    /// Near-white pink background
    Pastel,
}

impl Theme {
    /// Background color as RGB.
    pub fn background(self) -> [u8; 3] {
        match self {
            Theme::Light => [0xff, 0xff, 0xff],
            Theme::Dark => [0x1c, 0x1c, 0x1c],
            Theme::Pastel => [0xfe, 0xf7, 0xf7],
        }
    }

    /// Name of the colormap used for word colors.
    pub fn colormap(self) -> &'static str {
        match self {
            Theme::Dark => "viridis",
            Theme::Light | Theme::Pastel => "plasma",
        }
    }

    /// Returns all themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark, Theme::Pastel]
    }

    /// Returns all theme names.
    pub fn all_names() -> &'static [&'static str] {
        &["light", "dark", "pastel"]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::Pastel => write!(f, "pastel"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "pastel" => Ok(Theme::Pastel),
            _ => Err(format!(
                "Unknown theme: '{}'. Expected one of: {}",
                s,
                Theme::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for message extraction.
///
/// # Example
///
/// ```rust
/// use wordstorm::config::ExtractConfig;
///
/// let config = ExtractConfig::new()
///     .with_emojis(false)
///     .with_join_continuations(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Keep emoji glyphs in message bodies (default: false)
    pub include_emojis: bool,

    /// Append timestamp-less lines to the preceding message (default: false)
    ///
    /// When disabled, every physical line is matched on its own and the
    /// continuation lines of a multi-line message are dropped.
    pub join_continuations: bool,
}

impl ExtractConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether emoji glyphs are kept.
    #[must_use]
    pub fn with_emojis(mut self, include: bool) -> Self {
        self.include_emojis = include;
        self
    }

    /// Sets whether continuation lines are joined onto the previous message.
    #[must_use]
    pub fn with_join_continuations(mut self, join: bool) -> Self {
        self.join_continuations = join;
        self
    }
}

/// Configuration for word-cloud rendering.
///
/// # Example
///
/// ```rust
/// use wordstorm::config::{CloudConfig, Theme};
///
/// let config = CloudConfig::new().with_theme(Theme::Pastel).with_seed(7);
/// assert!(config.validate().is_ok());
///
/// let bad = CloudConfig::new().with_seed(0);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Color theme (default: light)
    pub theme: Theme,

    /// Weight words by a naive whitespace-split count instead of processing
    /// the raw text (default: true)
    pub use_freq: bool,

    /// Layout seed, within [`SEED_RANGE`] (default: 1)
    pub random_seed: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            use_freq: true,
            random_seed: *SEED_RANGE.start(),
        }
    }
}

impl CloudConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enables or disables frequency-weighted mode.
    #[must_use]
    pub fn with_frequency_mode(mut self, enabled: bool) -> Self {
        self.use_freq = enabled;
        self
    }

    /// Sets the layout seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Checks that the seed lies within [`SEED_RANGE`].
    pub fn validate(&self) -> Result<()> {
        if SEED_RANGE.contains(&self.random_seed) {
            Ok(())
        } else {
            Err(WordstormError::InvalidSeed {
                seed: self.random_seed,
                min: *SEED_RANGE.start(),
                max: *SEED_RANGE.end(),
            })
        }
    }
}
