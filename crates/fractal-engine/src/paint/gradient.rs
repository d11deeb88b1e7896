use serde::{Deserialize, Serialize};

use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `position` is expected in [0, 1]. Hosts sort stops by position.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Linear gradient definition.
///
/// Semantics:
/// - `start` and `end` are handle positions in the filled shape's unit
///   space: `(0, 0)` is its top-left corner, `(1, 1)` its bottom-right.
/// - Stops define straight-alpha colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Gradient running from the top edge to the bottom edge of the shape.
    pub fn vertical(stops: Vec<ColorStop>) -> Self {
        Self::new(Vec2::new(0.5, 0.0), Vec2::new(0.5, 1.0), stops)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.position.is_finite() && s.color.is_finite())
            && self.stops.len() >= 2
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}
