//! Ordered color palettes: continuous sampling and extraction from a target.

mod extract;
mod sample;

use serde::{Deserialize, Serialize};

use crate::paint::Color;

pub use extract::extract;

/// Ordered, non-empty list of colors.
///
/// Order is meaningful: it is the interpolation path of [`Palette::sample`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Returns `None` for an empty list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() { None } else { Some(Self { colors }) }
    }

    /// A palette with one color; sampling always returns it.
    pub fn single(color: Color) -> Self {
        Self { colors: vec![color] }
    }

    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: a palette holds at least one color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Violet, sky blue, teal.
impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0.4, 0.3, 0.9),
                Color::rgb(0.2, 0.6, 1.0),
                Color::rgb(0.0, 0.8, 0.6),
            ],
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = &'static str;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Palette::new(colors).ok_or("palette needs at least one color")
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
