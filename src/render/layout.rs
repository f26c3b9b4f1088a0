//! Greedy word placement over an ink-occupancy map.
//!
//! Words are placed largest first. Each word gets a font size scaled from
//! the previous word's by the ratio of their weights, then a position drawn
//! uniformly from every spot where its box (plus margin) touches no ink.
//! When nothing is free the other orientation is tried once, after which
//! the font shrinks step by step.

use rand::Rng;
use tracing::{debug, trace};

use super::glyph::{Orientation, for_each_ink, text_size};

/// Knobs of the placement loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LayoutSettings {
    pub width: u32,
    pub height: u32,
    pub min_font_size: u32,
    pub font_step: u32,
    pub margin: u32,
    pub prefer_horizontal: f64,
    pub relative_scaling: f64,
}

/// A word with its final size and position, before coloring.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slot {
    pub word: String,
    pub weight: f64,
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub orientation: Orientation,
}

/// Inked pixels of the canvas plus their summed-area table.
#[derive(Debug, Clone)]
pub(crate) struct Occupancy {
    width: usize,
    height: usize,
    ink: Vec<bool>,
    /// `(height + 1) × (width + 1)`; entry `(r, c)` counts ink in rows `< r`
    /// and columns `< c`.
    integral: Vec<u32>,
}

impl Occupancy {
    pub fn new(width: u32, height: u32) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            width,
            height,
            ink: vec![false; width * height],
            integral: vec![0; (width + 1) * (height + 1)],
        }
    }

    fn stride(&self) -> usize {
        self.width + 1
    }

    /// Ink count inside the `w × h` box at `(x, y)`.
    fn area(&self, x: usize, y: usize, w: usize, h: usize) -> u32 {
        let s = self.stride();
        let table = &self.integral;
        table[(y + h) * s + x + w] + table[y * s + x]
            - table[y * s + x + w]
            - table[(y + h) * s + x]
    }

    /// Picks a uniformly random ink-free position for a `w × h` box.
    pub fn sample_position<R: Rng + ?Sized>(
        &self,
        w: u32,
        h: u32,
        rng: &mut R,
    ) -> Option<(u32, u32)> {
        let (w, h) = (w as usize, h as usize);
        if w == 0 || h == 0 || w > self.width || h > self.height {
            return None;
        }

        let hits = self.free_positions(w, h).count();
        if hits == 0 {
            return None;
        }
        let goal = rng.gen_range(0..hits);
        self.free_positions(w, h)
            .nth(goal)
            .map(|(x, y)| (x as u32, y as u32))
    }

    /// Top-left corners where a `w × h` box covers no ink, row by row.
    fn free_positions(&self, w: usize, h: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (xs, ys) = (self.width - w + 1, self.height - h + 1);
        (0..ys)
            .flat_map(move |y| (0..xs).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.area(x, y, w, h) == 0)
    }

    pub fn mark(&mut self, x: u32, y: u32) {
        let index = y as usize * self.width + x as usize;
        self.ink[index] = true;
    }

    /// Rebuilds the summed-area table below and right of `(x0, y0)`, the
    /// only region a word drawn at that corner can change.
    pub fn refresh_from(&mut self, x0: u32, y0: u32) {
        let s = self.stride();
        for r in y0 as usize + 1..=self.height {
            for c in x0 as usize + 1..=self.width {
                let cell = u32::from(self.ink[(r - 1) * self.width + c - 1]);
                self.integral[r * s + c] = cell
                    + self.integral[(r - 1) * s + c]
                    + self.integral[r * s + c - 1]
                    - self.integral[(r - 1) * s + c - 1];
            }
        }
    }
}

/// Returns `true` if `word` fits the empty canvas at the minimum size in
/// either orientation.
fn fits_at_all(word: &str, settings: &LayoutSettings) -> bool {
    [Orientation::Horizontal, Orientation::Vertical]
        .into_iter()
        .any(|orientation| {
            let (w, h) = text_size(word, settings.min_font_size, orientation);
            w + settings.margin <= settings.width && h + settings.margin <= settings.height
        })
}

/// Places `weights` (sorted descending, normalized so the first is `1.0`)
/// starting from `max_font_size`.
///
/// Stops at the first word that no longer fits at the minimum font size.
/// Words too long to fit even an empty canvas are skipped.
pub(crate) fn place_words<R: Rng + ?Sized>(
    weights: &[(&str, f64)],
    max_font_size: u32,
    settings: &LayoutSettings,
    rng: &mut R,
) -> Vec<Slot> {
    let mut occupancy = Occupancy::new(settings.width, settings.height);
    let mut slots = Vec::new();
    let mut font_size = max_font_size;
    let mut last_weight = 1.0_f64;
    let min_font = settings.min_font_size.max(1);
    let step = settings.font_step.max(1);
    let rs = settings.relative_scaling;

    for &(word, weight) in weights {
        if weight <= 0.0 {
            continue;
        }
        if rs != 0.0 {
            let scaled = (rs * (weight / last_weight) + (1.0 - rs)) * f64::from(font_size);
            font_size = scaled.round().max(0.0) as u32;
        }
        if !fits_at_all(word, settings) {
            debug!(word, "word does not fit the canvas, skipping");
            continue;
        }

        let mut orientation = if rng.gen_range(0.0..1.0) < settings.prefer_horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut tried_other_orientation = false;

        let position = loop {
            if font_size < min_font {
                break None;
            }
            let (w, h) = text_size(word, font_size, orientation);
            if let Some(found) =
                occupancy.sample_position(w + settings.margin, h + settings.margin, rng)
            {
                break Some(found);
            }
            if !tried_other_orientation && settings.prefer_horizontal < 1.0 {
                orientation = orientation.flipped();
                tried_other_orientation = true;
            } else {
                font_size = font_size.saturating_sub(step);
                orientation = Orientation::Horizontal;
            }
        };

        let Some((x, y)) = position else {
            debug!(word, placed = slots.len(), "canvas full, stopping layout");
            break;
        };
        let (x, y) = (x + settings.margin / 2, y + settings.margin / 2);

        for_each_ink(word, font_size, orientation, |dx, dy| {
            occupancy.mark(x + dx, y + dy);
        });
        occupancy.refresh_from(x, y);
        trace!(word, font_size, x, y, ?orientation, "placed word");

        slots.push(Slot {
            word: word.to_string(),
            weight,
            font_size,
            x,
            y,
            orientation,
        });
        last_weight = weight;
    }

    slots
}
