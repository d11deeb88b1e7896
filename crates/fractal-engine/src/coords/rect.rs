use serde::{Deserialize, Serialize};

use super::Vec2;

/// Axis-aligned rectangle in host coordinates (top-left origin).
///
/// Doubles as the `Bounds` of a target element: origin and size, read once
/// per generation call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.size.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.size.y
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same size, origin moved to `(0, 0)`.
    #[inline]
    pub fn local(self) -> Self {
        Self::from_origin_size(Vec2::zero(), self.size)
    }
}
