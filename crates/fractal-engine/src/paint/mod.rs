//! Paint model handed to host scene graphs.
//!
//! Scope:
//! - color representation (straight alpha, normalized channels)
//! - paint sources (solid, linear gradients)
//! - blend modes
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;

use serde::{Deserialize, Serialize};

pub use blend::BlendMode;
pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Paint source for filling geometry.
///
/// Image and radial paints exist on hosts but the generator never emits
/// them, so the enum stays small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
