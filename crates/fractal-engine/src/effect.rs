//! Post-effects declared on generated nodes.
//!
//! The engine only declares parameters; blur and glass rasterization belong
//! to the host.

use serde::{Deserialize, Serialize};

/// Parameters for the host's composite glass effect.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassParams {
    /// Highlight strength in `[0, 1]`.
    pub light_intensity: f32,
    /// Highlight direction in degrees.
    pub light_angle: f32,
    /// Refraction amount in `[0, 1]`.
    pub refraction: f32,
    pub depth: f32,
    /// Chromatic dispersion in `[0, 1]`.
    pub dispersion: f32,
    /// Frost blur radius in host units.
    pub frost_radius: f32,
}

/// A post-effect attached to a node, tagged the way hosts tag them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    /// Blurs the node's own content.
    LayerBlur { radius: f32 },
    /// Blurs whatever lies behind the node.
    BackgroundBlur { radius: f32 },
    Glass(GlassParams),
}

impl Effect {
    /// Blur radius carried by the effect, if it is a blur.
    pub fn blur_radius(&self) -> Option<f32> {
        match *self {
            Effect::LayerBlur { radius } | Effect::BackgroundBlur { radius } => Some(radius),
            Effect::Glass(_) => None,
        }
    }
}
