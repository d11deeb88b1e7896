use crate::coords::Rect;
use crate::effect::{Effect, GlassParams};
use crate::layout::StripeSpec;
use crate::random::SeedStream;

use super::Shape;

/// Maximum light-angle deviation per pane, in degrees.
const ANGLE_JITTER: f64 = 8.0;

/// One transparent, full-height pane per stripe carrying `params`.
///
/// Each pane's light angle is `params.light_angle` jittered by up to
/// ±8° from its own seed, so panes catch the light slightly differently.
pub fn glass_panes(stripes: &[StripeSpec], height: f64, params: GlassParams, seed: i64) -> Vec<Shape> {
    stripes
        .iter()
        .enumerate()
        .map(|(i, stripe)| {
            let jitter = (SeedStream::PANE_ANGLE.draw(seed, i) - 0.5) * 2.0 * ANGLE_JITTER;
            let pane = GlassParams { light_angle: params.light_angle + jitter as f32, ..params };
            Shape::new(Rect::new(stripe.x, 0.0, stripe.width, height), Vec::new()).with_effect(Effect::Glass(pane))
        })
        .collect()
}
