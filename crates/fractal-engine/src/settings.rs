//! User-facing effect configuration.
//!
//! Every field is optional in JSON and falls back to the value in
//! [`EffectSettings::default`]. Percentages are consumed as given: callers
//! supply values already in range.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::paint::{BlendMode, Color};
use crate::quality::QualityTier;

/// Which family of layers the compositor builds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectVariant {
    /// Palette-colored gradient stripes plus blurred copies of them.
    Gradient,
    /// Frost stripes, refraction lines and frost zones.
    #[default]
    Fractal,
    /// One glass pane per stripe carrying the host's glass effect.
    Glass,
}

impl FromStr for EffectVariant {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gradient" => Ok(EffectVariant::Gradient),
            "fractal" => Ok(EffectVariant::Fractal),
            "glass" => Ok(EffectVariant::Glass),
            other => Err(GenerateError::invalid(format!(
                "unknown effect variant '{other}' (expected gradient, fractal or glass)"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMode {
    Uniform,
    #[default]
    Random,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Use `palette` from the settings.
    #[default]
    Custom,
    /// Take colors from the target's own solid fills, falling back to `palette`.
    Extract,
}

/// One blurred copy of the gradient stripes.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlurLayer {
    pub radius: f32,
    /// Percent, 0–100. Zero skips the layer.
    pub opacity: f32,
}

impl BlurLayer {
    pub const fn new(radius: f32, opacity: f32) -> Self {
        Self { radius, opacity }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct EffectSettings {
    pub variant: EffectVariant,

    // pattern
    /// Stripes per target at standard quality; must be at least 1. Values are
    /// not clamped, so keep them in the hundreds: one shape is built per stripe.
    pub stripe_density: f64,
    pub width_mode: WidthMode,
    pub width_variation: f64,
    pub gradient_offset: f64,

    // color
    pub color_mode: ColorMode,
    /// May be empty in JSON; generation then uses the built-in palette.
    pub palette: Vec<Color>,

    // glass
    pub blur_layers: Vec<BlurLayer>,
    pub blend_mode: BlendMode,
    pub opacity: f32,
    pub frosting: f32,
    pub clarity: f32,
    pub refraction: f32,
    pub depth: f32,
    pub dispersion: f32,
    /// Degrees.
    pub light_angle: f32,
    pub light_intensity: f32,

    // performance
    pub quality: QualityTier,
    /// Frost zones; `None` uses the quality profile's count.
    pub blur_zone_count: Option<usize>,
    pub seed: i64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            variant: EffectVariant::default(),
            stripe_density: 80.0,
            width_mode: WidthMode::default(),
            width_variation: 30.0,
            gradient_offset: 0.0,
            color_mode: ColorMode::default(),
            palette: crate::palette::Palette::default().into(),
            blur_layers: vec![BlurLayer::new(20.0, 80.0), BlurLayer::new(40.0, 40.0)],
            blend_mode: BlendMode::Overlay,
            opacity: 70.0,
            frosting: 50.0,
            clarity: 70.0,
            refraction: 30.0,
            depth: 50.0,
            dispersion: 20.0,
            light_angle: -45.0,
            light_intensity: 50.0,
            quality: QualityTier::default(),
            blur_zone_count: None,
            seed: time_seed(),
        }
    }
}

/// Complete, ready-to-use settings with a fresh time-derived seed.
pub fn defaults() -> EffectSettings {
    EffectSettings::default()
}

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
pub fn time_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

impl EffectSettings {
    /// Parses settings from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GenerateError::invalid(e.to_string()))
    }

    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_variant(mut self, variant: EffectVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Width variation actually applied to the partition.
    pub fn effective_variation(&self) -> f64 {
        match self.width_mode {
            WidthMode::Uniform => 0.0,
            WidthMode::Random => self.width_variation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_all_defaults() {
        let s = EffectSettings::from_json("{}").unwrap();
        let d = EffectSettings::default();
        assert_eq!(s.stripe_density, d.stripe_density);
        assert_eq!(s.blur_layers, d.blur_layers);
        assert_eq!(s.palette.len(), 3);
        assert_eq!(s.quality, QualityTier::Standard);
        assert_eq!(s.variant, EffectVariant::Fractal);
        assert_eq!(s.blend_mode, BlendMode::Overlay);
    }

    #[test]
    fn camel_case_fields() {
        let s = EffectSettings::from_json(
            r#"{"stripeDensity": 12, "widthMode": "uniform", "blurZoneCount": 2, "seed": 9, "quality": "high"}"#,
        )
        .unwrap();
        assert_eq!(s.stripe_density, 12.0);
        assert_eq!(s.width_mode, WidthMode::Uniform);
        assert_eq!(s.blur_zone_count, Some(2));
        assert_eq!(s.seed, 9);
        assert_eq!(s.quality, QualityTier::High);
    }

    #[test]
    fn unknown_quality_is_invalid_configuration() {
        let err = EffectSettings::from_json(r#"{"quality": "ultra"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
    }

    #[test]
    fn unknown_variant_is_invalid_configuration() {
        assert!(EffectSettings::from_json(r#"{"variant": "mosaic"}"#).is_err());
    }

    #[test]
    fn misspelled_field_is_invalid_configuration() {
        let err = EffectSettings::from_json(r#"{"qualty": "ultra"}"#).unwrap_err();
        assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
    }

    #[test]
    fn variant_names_parse() {
        assert_eq!("glass".parse::<EffectVariant>().unwrap(), EffectVariant::Glass);
        assert!("mosaic".parse::<EffectVariant>().is_err());
    }

    #[test]
    fn palette_alpha_defaults_to_one() {
        let s = EffectSettings::from_json(r#"{"palette": [{"r": 0.5, "g": 0.5, "b": 0.5}]}"#).unwrap();
        assert_eq!(s.palette, vec![Color::rgb(0.5, 0.5, 0.5)]);
    }

    #[test]
    fn uniform_mode_disables_variation() {
        let s = EffectSettings { width_mode: WidthMode::Uniform, ..EffectSettings::default() };
        assert_eq!(s.effective_variation(), 0.0);
        let s = EffectSettings { width_mode: WidthMode::Random, width_variation: 25.0, ..s };
        assert_eq!(s.effective_variation(), 25.0);
    }

    #[test]
    fn defaults_carry_a_time_seed() {
        assert!(defaults().seed > 0);
    }

    #[test]
    fn settings_round_trip_through_json() {
        let s = EffectSettings::default().with_seed(5);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(EffectSettings::from_json(&json).unwrap(), s);
    }
}
