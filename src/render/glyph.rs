//! Bitmap text rasterization.
//!
//! Words are drawn with the public-domain 8×8 font from `font8x8`, scaled
//! to the requested size by nearest-neighbour sampling. Every character
//! occupies a square cell `font_size` pixels wide; characters without a
//! glyph leave their cell blank.

use font8x8::{BASIC_FONTS, GREEK_FONTS, LATIN_FONTS, MISC_FONTS, UnicodeFonts};
use serde::{Deserialize, Serialize};

/// Side length of a source glyph.
const GLYPH_SIZE: u32 = 8;

/// Direction a word is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right
    #[default]
    Horizontal,
    /// Rotated 90° counter-clockwise, reading bottom to top
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| MISC_FONTS.get(c))
}

/// Width and height of the box `text` occupies.
pub fn text_size(text: &str, font_size: u32, orientation: Orientation) -> (u32, u32) {
    let run = text.chars().count() as u32 * font_size;
    match orientation {
        Orientation::Horizontal => (run, font_size),
        Orientation::Vertical => (font_size, run),
    }
}

/// Calls `plot(x, y)` for every inked pixel of `text`, relative to the
/// top-left corner of its box.
pub fn for_each_ink<F>(text: &str, font_size: u32, orientation: Orientation, mut plot: F)
where
    F: FnMut(u32, u32),
{
    if font_size == 0 {
        return;
    }
    let run = text.chars().count() as u32 * font_size;

    for (index, c) in text.chars().enumerate() {
        let Some(bitmap) = glyph(c) else { continue };
        let origin = index as u32 * font_size;

        for py in 0..font_size {
            let row = bitmap[(py * GLYPH_SIZE / font_size) as usize];
            if row == 0 {
                continue;
            }
            for px in 0..font_size {
                let bit = px * GLYPH_SIZE / font_size;
                if (row >> bit) & 1 == 0 {
                    continue;
                }
                let tx = origin + px;
                match orientation {
                    Orientation::Horizontal => plot(tx, py),
                    Orientation::Vertical => plot(py, run - 1 - tx),
                }
            }
        }
    }
}
