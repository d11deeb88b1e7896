use crate::coords::Rect;
use crate::layout::StripeSpec;
use crate::paint::{Color, ColorStop, LinearGradient, Paint};
use crate::random::SeedStream;

use super::Shape;

/// One full-height rectangle per stripe with a white top/mid/bottom
/// gradient.
///
/// Each stop's alpha is drawn from its own seed stream so adjacent stripes
/// do not band.
pub fn frost_stripes(stripes: &[StripeSpec], height: f64, seed: i64) -> Vec<Shape> {
    stripes
        .iter()
        .enumerate()
        .map(|(i, stripe)| {
            let top = 0.05 + 0.25 * SeedStream::FROST_TOP.draw(seed, i);
            let mid = 0.02 + 0.10 * SeedStream::FROST_MID.draw(seed, i);
            let bottom = 0.05 + 0.25 * SeedStream::FROST_BOTTOM.draw(seed, i);

            let gradient = LinearGradient::vertical(vec![
                ColorStop::new(0.0, Color::white().with_alpha(top as f32)),
                ColorStop::new(0.5, Color::white().with_alpha(mid as f32)),
                ColorStop::new(1.0, Color::white().with_alpha(bottom as f32)),
            ]);
            debug_assert!(gradient.is_valid(), "stripe {i} built a degenerate gradient");
            Shape::new(Rect::new(stripe.x, 0.0, stripe.width, height), vec![Paint::LinearGradient(gradient)])
        })
        .collect()
}
