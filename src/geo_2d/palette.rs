use std::fmt;
use itertools::Itertools;
use serde::{Serialize, Deserialize};

/// Colors allowed by a new palette.
pub const DEFAULT_COLORS: [&str; 7] = ["red", "blue", "green", "yellow", "black", "white", "periwinkle"];

/// On-disk form of a palette.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
struct PaletteCfg {
    colors: Vec<String>,
}

/// Allow-list of colors for restricted points.
/// Owned by the caller and handed to point construction by reference.
/// Keeps insertion order and holds each color once.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(from = "PaletteCfg", into = "PaletteCfg")]
pub struct Palette {
    colors: Vec<String>,
}
impl Palette {
    /// Create a palette with the default colors.
    pub fn new() -> Self {
        Palette::from_colors(DEFAULT_COLORS)
    }

    /// Create a palette that allows nothing.
    pub fn empty() -> Self {
        Palette{colors: Vec::new()}
    }

    /// Create a palette from a list of colors, dropping repeats.
    pub fn from_colors<I, S>(colors: I) -> Self
    where I: IntoIterator<Item = S>, S: Into<String>
    {
        let mut palette = Palette::empty();
        for color in colors {
            palette.add_color(color);
        }
        palette
    }

    /// Allow a new color for every later construction against this palette.
    /// Returns `false` if the color was already allowed.
    pub fn add_color<S: Into<String>>(&mut self, color: S) -> bool {
        let color = color.into();
        if self.contains(&color) {
            return false;
        }
        log::debug!("Palette extended with {}", color);
        self.colors.push(color);
        true
    }

    /// Check if a color is allowed.
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|allowed| allowed == color)
    }

    /// Iterate over the allowed colors, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
impl Default for Palette {
    fn default() -> Self {
        Palette::new()
    }
}
impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.colors.iter().join(", "))
    }
}
impl From<PaletteCfg> for Palette {
    fn from(cfg: PaletteCfg) -> Self {
        Palette::from_colors(cfg.colors)
    }
}
impl From<Palette> for PaletteCfg {
    fn from(palette: Palette) -> Self {
        PaletteCfg{colors: palette.colors}
    }
}
