//! Which layers each effect variant stacks, and in what order.

use crate::coords::Vec2;
use crate::effect::{Effect, GlassParams};
use crate::layout::StripeSpec;
use crate::palette::Palette;
use crate::quality::QualityProfile;
use crate::settings::{BlurLayer, EffectSettings};

use super::{
    Composition, LayerKind, frost_stripes, frost_zones, glass_panes, gradient_stripes, refraction_lines,
};

/// Glass frost radius at 100% frosting, before quality scaling.
const MAX_PANE_FROST: f32 = 20.0;

/// Resolved geometry and parameters shared by every recipe.
pub(crate) struct Plan<'a> {
    /// Target size; layer geometry is relative to the target origin.
    pub size: Vec2,
    pub stripes: &'a [StripeSpec],
    pub profile: QualityProfile,
    pub settings: &'a EffectSettings,
    pub zone_count: usize,
}

/// Gradient stripes, then one blurred copy per blur layer.
pub(crate) fn gradient(plan: &Plan<'_>, palette: &Palette, out: &mut Composition) {
    let s = plan.settings;
    let shapes = gradient_stripes(plan.stripes, plan.size.y, palette, s.gradient_offset);
    let Some(base) = out.push_shapes(LayerKind::GradientStripes, 1.0, shapes) else {
        return;
    };

    for &BlurLayer { radius, opacity } in &s.blur_layers {
        let blur = Effect::LayerBlur { radius: radius * plan.profile.blur_scale };
        out.push_clone(base, LayerKind::BlurCopy, opacity / 100.0, vec![blur]);
    }
}

/// Frost stripes, refraction lines, frost zones.
pub(crate) fn fractal(plan: &Plan<'_>, out: &mut Composition) {
    let s = plan.settings;
    let Vec2 { x: width, y: height } = plan.size;
    let blur_scale = plan.profile.blur_scale;

    out.push_shapes(
        LayerKind::FrostStripes,
        (100.0 - s.clarity) / 100.0,
        frost_stripes(plan.stripes, height, s.seed),
    );

    let line_count = ((plan.stripes.len() as f64 * plan.profile.line_ratio).round() as usize).max(1);
    out.push_shapes(
        LayerKind::RefractionLines,
        s.refraction / 100.0,
        refraction_lines(width, height, line_count, s.seed, blur_scale),
    );

    out.push_shapes(
        LayerKind::FrostZones,
        s.frosting / 100.0,
        frost_zones(plan.size, plan.zone_count, s.seed, s.frosting, blur_scale),
    );
}

/// One layer of glass panes.
pub(crate) fn glass(plan: &Plan<'_>, out: &mut Composition) {
    let s = plan.settings;
    let params = GlassParams {
        light_intensity: s.light_intensity / 100.0,
        light_angle: s.light_angle,
        refraction: s.refraction / 100.0,
        depth: s.depth,
        dispersion: s.dispersion / 100.0,
        frost_radius: MAX_PANE_FROST * s.frosting / 100.0 * plan.profile.blur_scale,
    };
    out.push_shapes(LayerKind::GlassPanes, 1.0, glass_panes(plan.stripes, plan.size.y, params, s.seed));
}
