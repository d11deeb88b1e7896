//! Generation entry points.
//!
//! `generate` works from bare bounds; `generate_for` reads bounds (and, in
//! extract mode, colors) from a host element. Both are pure: the same
//! bounds and settings, seed included, always give the same result.

use crate::compose::recipe::{self, Plan};
use crate::compose::{Composition, GeneratedResult};
use crate::coords::Rect;
use crate::error::{GenerateError, Result};
use crate::host::SourceNode;
use crate::layout::{partition, stripe_count};
use crate::palette::{self, Palette};
use crate::settings::{ColorMode, EffectSettings, EffectVariant};

/// Fewest stripes a density can resolve to.
pub const MIN_STRIPES: usize = 4;

/// Generates the overlay for a target region.
///
/// In extract color mode there is no element to read colors from, so the
/// settings palette is used.
pub fn generate(target: Rect, settings: &EffectSettings) -> Result<GeneratedResult> {
    if settings.color_mode == ColorMode::Extract {
        log::debug!("extract color mode without a source element; using settings palette");
    }
    build(target, settings, None)
}

/// Generates the overlay for a host element.
///
/// Fails with `MissingTarget` when the element has no bounds.
pub fn generate_for(target: &dyn SourceNode, settings: &EffectSettings) -> Result<GeneratedResult> {
    let bounds = target
        .bounds()
        .ok_or_else(|| GenerateError::missing_target("target element has no width or height"))?;

    let extracted = match settings.color_mode {
        ColorMode::Extract => {
            let found = palette::extract(target);
            if found.is_none() {
                log::debug!("no solid fill in target subtree; using settings palette");
            }
            found
        }
        ColorMode::Custom => None,
    };

    build(bounds, settings, extracted)
}

fn build(bounds: Rect, settings: &EffectSettings, extracted: Option<Palette>) -> Result<GeneratedResult> {
    if !bounds.is_finite() {
        return Err(GenerateError::missing_target(format!("target bounds are not finite: {bounds:?}")));
    }

    let profile = settings.quality.profile();
    let count = stripe_count(settings.stripe_density, profile.count_multiplier, MIN_STRIPES)?;
    let zone_count = match settings.blur_zone_count {
        Some(0) => return Err(GenerateError::invalid("blur zone count must be at least 1")),
        Some(n) => n,
        None => profile.zone_count,
    };

    let mut composition = Composition::new();
    let finish = |composition: Composition| composition.finish(bounds, settings.blend_mode, settings.opacity / 100.0);

    if bounds.is_empty() {
        log::debug!("target {bounds:?} has no area; producing an empty result");
        return Ok(finish(composition));
    }

    let stripes = partition(bounds.width(), count, settings.effective_variation(), settings.seed)?;
    let plan = Plan {
        size: bounds.size,
        stripes: &stripes,
        profile,
        settings,
        zone_count,
    };

    log::debug!(
        "generating {:?} ({} quality): {} stripes, {} zones, seed {}",
        settings.variant,
        settings.quality,
        count,
        zone_count,
        settings.seed
    );

    match settings.variant {
        EffectVariant::Gradient => {
            let palette = extracted.unwrap_or_else(|| settings_palette(settings));
            recipe::gradient(&plan, &palette, &mut composition);
        }
        EffectVariant::Fractal => recipe::fractal(&plan, &mut composition),
        EffectVariant::Glass => recipe::glass(&plan, &mut composition),
    }

    Ok(finish(composition))
}

fn settings_palette(settings: &EffectSettings) -> Palette {
    Palette::new(settings.palette.clone()).unwrap_or_else(|| {
        log::warn!("settings palette is empty; using the default palette");
        Palette::default()
    })
}
