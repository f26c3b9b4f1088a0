//! Word-cloud rendering.
//!
//! [`RenderParams`] carries everything that shapes the picture: canvas
//! size, background, colormap, the stop-word set used for text processing,
//! the layout seed and the placement knobs. [`render_cloud`] turns weighted
//! words into a [`WordCloud`], which can be encoded as PNG.
//!
//! Rendering is deterministic. All randomness (orientation, position,
//! color) comes from one `ChaCha8Rng` seeded with the layout seed, so the
//! same words and parameters always produce byte-identical PNGs.
//!
//! # Example
//!
//! ```rust
//! use wordstorm::config::CloudConfig;
//! use wordstorm::core::frequency::WordCount;
//! use wordstorm::render::{RenderParams, render_cloud};
//!
//! # fn main() -> wordstorm::Result<()> {
//! let params = RenderParams::from_config(&CloudConfig::new().with_seed(7)).with_size(300, 150);
//! let words = vec![WordCount::new("pizza", 5), WordCount::new("movie", 2)];
//!
//! let cloud = render_cloud(&words, &params)?;
//! assert_eq!(cloud.words()[0].word, "pizza");
//! assert!(cloud.to_png()?.starts_with(b"\x89PNG"));
//! # Ok(())
//! # }
//! ```

mod colormap;
mod glyph;
mod layout;

use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

pub use colormap::Colormap;
pub use glyph::{Orientation, text_size};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CloudConfig};
use crate::core::frequency::{WordCount, cloud_frequencies_with};
use crate::core::stopwords::stopwords;
use crate::error::{Result, WordstormError};
use layout::{LayoutSettings, Slot, place_words};

/// Parameters of one rendering.
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Background color
    pub background: [u8; 3],
    /// Palette word colors are drawn from
    pub colormap: Colormap,
    /// Words dropped when the cloud is built from processed text
    pub stopwords: &'static HashSet<&'static str>,
    /// Weight words by naive whitespace-split counts
    pub use_freq: bool,
    /// Layout seed
    pub seed: u64,
    /// Upper bound on the number of words drawn
    pub max_words: usize,
    /// Smallest font size before layout stops
    pub min_font_size: u32,
    /// Largest font size; derived from a trial layout when `None`
    pub max_font_size: Option<u32>,
    /// Shrink step when a word does not fit
    pub font_step: u32,
    /// Free space kept around each word
    pub margin: u32,
    /// Probability of writing a word horizontally
    pub prefer_horizontal: f64,
    /// How strongly weight differences shrink successive words (0 to 1)
    pub relative_scaling: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            background: [0xff, 0xff, 0xff],
            colormap: Colormap::default(),
            stopwords: stopwords(),
            use_freq: true,
            seed: 1,
            max_words: 200,
            min_font_size: 4,
            max_font_size: None,
            font_step: 1,
            margin: 2,
            prefer_horizontal: 0.9,
            relative_scaling: 0.5,
        }
    }
}

impl RenderParams {
    /// Derives rendering parameters from the user-facing configuration.
    pub fn from_config(config: &CloudConfig) -> Self {
        Self {
            background: config.theme.background(),
            colormap: Colormap::from_name(config.theme.colormap()).unwrap_or_default(),
            use_freq: config.use_freq,
            seed: config.random_seed,
            ..Self::default()
        }
    }

    /// Overrides the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Limits the number of words drawn.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Fixes the largest font size instead of deriving it.
    #[must_use]
    pub fn with_max_font_size(mut self, size: u32) -> Self {
        self.max_font_size = Some(size);
        self
    }

    fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            width: self.width,
            height: self.height,
            min_font_size: self.min_font_size,
            font_step: self.font_step,
            margin: self.margin,
            prefer_horizontal: self.prefer_horizontal,
            relative_scaling: self.relative_scaling,
        }
    }

    /// Weights messages with these parameters' mode and stop-words, then
    /// renders them.
    pub fn generate<S: AsRef<str>>(&self, messages: &[S]) -> Result<WordCloud> {
        let frequencies = cloud_frequencies_with(messages, self.use_freq, self.stopwords);
        render_cloud(&frequencies, self)
    }
}

/// A word as it appears in the finished cloud.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    /// The drawn text
    pub word: String,
    /// Weight relative to the heaviest word, in `(0, 1]`
    pub weight: f64,
    /// Cell size of each character in pixels
    pub font_size: u32,
    /// Left edge of the word's box
    pub x: u32,
    /// Top edge of the word's box
    pub y: u32,
    /// Writing direction
    pub orientation: Orientation,
    /// Fill color
    pub color: [u8; 3],
}

impl PlacedWord {
    fn from_slot(slot: Slot, color: [u8; 3]) -> Self {
        Self {
            word: slot.word,
            weight: slot.weight,
            font_size: slot.font_size,
            x: slot.x,
            y: slot.y,
            orientation: slot.orientation,
            color,
        }
    }

    /// Width and height of the word's box.
    pub fn size(&self) -> (u32, u32) {
        text_size(&self.word, self.font_size, self.orientation)
    }
}

/// A rendered word cloud.
#[derive(Debug, Clone)]
pub struct WordCloud {
    words: Vec<PlacedWord>,
    image: RgbImage,
}

impl WordCloud {
    /// Words in the order they were placed (heaviest first).
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// The painted canvas.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Canvas width and height.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Encodes the canvas as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.image.write_to(&mut buffer, ImageFormat::Png)?;
        Ok(buffer.into_inner())
    }

    /// Writes the canvas to `path` as PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }
}

/// Normalized `(word, weight)` pairs, heaviest first, capped at `max_words`.
fn normalized_weights(frequencies: &[WordCount], max_words: usize) -> Vec<(&str, f64)> {
    let mut ranked: Vec<&WordCount> = frequencies.iter().filter(|w| w.count > 0).collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(max_words);

    let Some(max) = ranked.first().map(|w| w.count as f64) else {
        return Vec::new();
    };
    ranked
        .into_iter()
        .map(|w| (w.word.as_str(), w.count as f64 / max))
        .collect()
}

/// Lays out and paints `frequencies` on a fresh canvas.
///
/// # Errors
///
/// Returns [`WordstormError::EmptyCloud`] when there is nothing to draw, and
/// an image error if the canvas cannot be created.
pub fn render_cloud(frequencies: &[WordCount], params: &RenderParams) -> Result<WordCloud> {
    let weights = normalized_weights(frequencies, params.max_words);
    if weights.is_empty() {
        return Err(WordstormError::EmptyCloud);
    }

    let settings = params.layout_settings();
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    let max_font_size = match params.max_font_size {
        Some(size) => size,
        None => {
            let top = &weights[..weights.len().min(2)];
            let trial = place_words(top, params.height, &settings, &mut rng);
            let size = match trial.as_slice() {
                [] => params.height,
                [only] => only.font_size,
                [first, second, ..] => {
                    2 * first.font_size * second.font_size / (first.font_size + second.font_size)
                }
            };
            debug!(size, trial = trial.len(), "derived max font size");
            size
        }
    };

    let slots = place_words(&weights, max_font_size, &settings, &mut rng);
    if slots.is_empty() {
        return Err(WordstormError::EmptyCloud);
    }

    let words: Vec<PlacedWord> = slots
        .into_iter()
        .map(|slot| {
            let color = params.colormap.sample(rng.gen_range(0.0..1.0));
            PlacedWord::from_slot(slot, color)
        })
        .collect();

    let image = paint(&words, params);
    info!(
        placed = words.len(),
        candidates = weights.len(),
        seed = params.seed,
        "rendered word cloud"
    );

    Ok(WordCloud { words, image })
}

fn paint(words: &[PlacedWord], params: &RenderParams) -> RgbImage {
    let mut image = RgbImage::from_pixel(params.width, params.height, Rgb(params.background));
    for word in words {
        let color = Rgb(word.color);
        glyph::for_each_ink(&word.word, word.font_size, word.orientation, |dx, dy| {
            image.put_pixel(word.x + dx, word.y + dy, color);
        });
    }
    image
}
