use crate::coords::{Rect, Vec2};
use crate::effect::Effect;
use crate::paint::{Color, Paint};
use crate::random::SeedStream;

use super::Shape;

/// Zone side as a fraction of the target side: `MIN + RANGE * r`.
const MIN_EXTENT: f64 = 0.15;
const EXTENT_RANGE: f64 = 0.35;
const ZONE_ALPHA: f32 = 0.04;
/// Background blur at 100% frosting, before quality scaling.
const MAX_ZONE_BLUR: f32 = 60.0;

/// `count` randomly sized and placed rectangles inside `size`, each with a
/// strong background blur scaled by `frosting_pct` and `blur_scale`.
///
/// Width, height, x and y each come from their own seed stream, so zones
/// are not placed along a diagonal.
pub fn frost_zones(size: Vec2, count: usize, seed: i64, frosting_pct: f32, blur_scale: f32) -> Vec<Shape> {
    let radius = MAX_ZONE_BLUR * frosting_pct / 100.0 * blur_scale;

    (0..count)
        .map(|i| {
            let w = size.x * (MIN_EXTENT + EXTENT_RANGE * SeedStream::ZONE_WIDTH.draw(seed, i));
            let h = size.y * (MIN_EXTENT + EXTENT_RANGE * SeedStream::ZONE_HEIGHT.draw(seed, i));
            let x = SeedStream::ZONE_X.draw(seed, i) * (size.x - w);
            let y = SeedStream::ZONE_Y.draw(seed, i) * (size.y - h);

            Shape::new(Rect::new(x, y, w, h), vec![Paint::solid(Color::white().with_alpha(ZONE_ALPHA))])
                .with_effect(Effect::BackgroundBlur { radius })
        })
        .collect()
}
