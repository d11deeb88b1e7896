//! Quality tiers and the multipliers they resolve to.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Coarse quality/performance tier chosen by the user.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QualityTier {
    /// Fewer stripes and softer blur; fastest to build and render.
    Draft,
    #[default]
    Standard,
    /// Denser stripes and stronger blur.
    High,
}

/// Concrete multipliers for a tier. Derived on every call, never persisted.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QualityProfile {
    /// Scales the requested stripe density.
    pub count_multiplier: f64,
    /// Scales every blur radius the compositor emits.
    pub blur_scale: f32,
    /// Frost zones when the settings do not name a count.
    pub zone_count: usize,
    /// Refraction lines per stripe.
    pub line_ratio: f64,
}

impl QualityTier {
    pub const ALL: [QualityTier; 3] = [QualityTier::Draft, QualityTier::Standard, QualityTier::High];

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Draft => "draft",
            QualityTier::Standard => "standard",
            QualityTier::High => "high",
        }
    }

    /// Resolves the tier to its profile. `Standard` is the neutral baseline.
    pub fn profile(self) -> QualityProfile {
        match self {
            QualityTier::Draft => QualityProfile {
                count_multiplier: 0.5,
                blur_scale: 0.7,
                zone_count: 3,
                line_ratio: 0.25,
            },
            QualityTier::Standard => QualityProfile {
                count_multiplier: 1.0,
                blur_scale: 1.0,
                zone_count: 5,
                line_ratio: 0.5,
            },
            QualityTier::High => QualityProfile {
                count_multiplier: 1.75,
                blur_scale: 1.3,
                zone_count: 8,
                line_ratio: 0.75,
            },
        }
    }
}

/// Resolves a tier name (`draft`, `standard`, `high`) straight to its profile.
pub fn resolve(tier: &str) -> Result<QualityProfile, GenerateError> {
    Ok(tier.parse::<QualityTier>()?.profile())
}

impl FromStr for QualityTier {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(QualityTier::Draft),
            "standard" => Ok(QualityTier::Standard),
            "high" => Ok(QualityTier::High),
            other => Err(GenerateError::invalid(format!(
                "unknown quality tier '{other}' (expected draft, standard or high)"
            ))),
        }
    }
}

impl TryFrom<String> for QualityTier {
    type Error = GenerateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QualityTier> for String {
    fn from(tier: QualityTier) -> Self {
        tier.as_str().to_owned()
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
