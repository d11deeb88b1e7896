use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, every channel normalized to `[0, 1]`.
///
/// This is the color model host scene graphs expose for fills and gradient
/// stops. Values are never mutated in place; interpolation produces new
/// colors.
///
/// When deserialized, a missing `a` reads as `1.0`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Returns the same RGB with a replaced alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Channel-wise linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        let a = Color::new(0.0, 0.2, 0.4, 1.0);
        let b = Color::new(1.0, 0.6, 0.0, 0.5);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let mid = Color::black().lerp(Color::white(), 0.5);
        assert_eq!(mid, Color::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn missing_alpha_deserializes_opaque() {
        let c: Color = serde_json::from_str(r#"{"r":0.1,"g":0.2,"b":0.3}"#).unwrap();
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn explicit_alpha_is_kept() {
        let c: Color = serde_json::from_str(r#"{"r":0.1,"g":0.2,"b":0.3,"a":0.25}"#).unwrap();
        assert_eq!(c.a, 0.25);
    }
}
