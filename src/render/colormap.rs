//! Perceptual colormaps used to paint words.

use serde::{Deserialize, Serialize};

/// Viridis, sampled at nine evenly spaced stops.
const VIRIDIS: [[u8; 3]; 9] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [253, 231, 37],
];

/// Plasma, sampled at nine evenly spaced stops.
const PLASMA: [[u8; 3]; 9] = [
    [13, 8, 135],
    [75, 3, 161],
    [125, 3, 168],
    [168, 34, 150],
    [203, 70, 121],
    [229, 107, 93],
    [248, 148, 65],
    [253, 195, 40],
    [240, 249, 33],
];

/// A continuous colormap, sampled by position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colormap {
    /// Dark blue through green to yellow
    Viridis,
    /// Deep blue through magenta to yellow
    #[default]
    Plasma,
}

impl Colormap {
    /// Looks a colormap up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "viridis" => Some(Colormap::Viridis),
            "plasma" => Some(Colormap::Plasma),
            _ => None,
        }
    }

    /// Lowercase name of the colormap.
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Plasma => "plasma",
        }
    }

    fn stops(self) -> &'static [[u8; 3]] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
        }
    }

    /// Returns the color at position `t`, linearly interpolated between
    /// stops. Values outside `[0, 1]` are clamped.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let stops = self.stops();
        let last = stops.len() - 1;
        let pos = t.clamp(0.0, 1.0) * last as f64;
        let i = (pos.floor() as usize).min(last - 1);
        let frac = pos - i as f64;

        let (lo, hi) = (stops[i], stops[i + 1]);
        let mut out = [0u8; 3];
        for (channel, (a, b)) in out.iter_mut().zip(lo.into_iter().zip(hi)) {
            let value = f64::from(a) + (f64::from(b) - f64::from(a)) * frac;
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

impl std::fmt::Display for Colormap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(Colormap::Viridis.sample(0.0), [68, 1, 84]);
        assert_eq!(Colormap::Viridis.sample(1.0), [253, 231, 37]);
        assert_eq!(Colormap::Plasma.sample(0.0), [13, 8, 135]);
        assert_eq!(Colormap::Plasma.sample(1.0), [240, 249, 33]);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Colormap::Plasma.sample(-3.0), Colormap::Plasma.sample(0.0));
        assert_eq!(Colormap::Plasma.sample(7.5), Colormap::Plasma.sample(1.0));
    }

    #[test]
    fn test_midpoint_between_stops() {
        // halfway between the first two viridis stops
        assert_eq!(Colormap::Viridis.sample(0.0625), [70, 21, 102]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Colormap::from_name("viridis"), Some(Colormap::Viridis));
        assert_eq!(Colormap::from_name("plasma"), Some(Colormap::Plasma));
        assert_eq!(Colormap::from_name("jet"), None);
        assert_eq!(Colormap::Viridis.to_string(), "viridis");
    }
}
