use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::random::SeedStream;

/// One vertical stripe, relative to the left edge of the target.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeSpec {
    pub x: f64,
    pub width: f64,
}

impl StripeSpec {
    #[inline]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}

/// Resolves the stripe count for a requested density.
///
/// Fails with `InvalidConfiguration` when `density < 1`. Otherwise the scaled
/// density is floored and raised to `min`, which keeps the count positive.
pub fn stripe_count(density: f64, multiplier: f64, min: usize) -> Result<usize> {
    if !(density >= 1.0) {
        return Err(GenerateError::invalid(format!(
            "stripe density must be at least 1, got {density}"
        )));
    }
    let scaled = (density * multiplier).floor();
    let scaled = if scaled.is_finite() && scaled > 0.0 { scaled as usize } else { 0 };
    Ok(scaled.max(min).max(1))
}

/// Splits `total_width` into `count` stripes.
///
/// With `variation_pct > 0` each raw width is `base * (1 + f)` where
/// `f = (random(seed + i) - 0.5) * 2 * variation_pct / 100`. With
/// `variation_pct == 0` the stripes are uniform and no random draw happens.
///
/// The raw widths are then rescaled so they sum to `total_width`, and every
/// `x` is the running sum of the rescaled widths before it: the result tiles
/// `[0, total_width]` with no gap or overlap.
pub fn partition(total_width: f64, count: usize, variation_pct: f64, seed: i64) -> Result<Vec<StripeSpec>> {
    if count < 1 {
        return Err(GenerateError::invalid("stripe count must be at least 1"));
    }

    let base = total_width / count as f64;
    let variation = variation_pct / 100.0;

    let raw: Vec<f64> = (0..count)
        .map(|i| {
            if variation_pct > 0.0 {
                let factor = (SeedStream::STRIPE_WIDTH.draw(seed, i) - 0.5) * 2.0 * variation;
                base * (1.0 + factor)
            } else {
                base
            }
        })
        .collect();

    // A draw can zero every raw width (one stripe, full variation); those
    // layouts fall back to uniform widths.
    let sum: f64 = raw.iter().sum();
    let (raw, scale) = if sum > 0.0 && sum.is_finite() {
        (raw, total_width / sum)
    } else {
        (vec![base; count], 1.0)
    };

    let mut x = 0.0;
    let stripes = raw
        .into_iter()
        .map(|w| {
            let stripe = StripeSpec { x, width: w * scale };
            x = stripe.right();
            stripe
        })
        .collect();

    Ok(stripes)
}
