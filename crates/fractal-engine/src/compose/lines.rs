use crate::coords::Rect;
use crate::effect::Effect;
use crate::layout::space_positions;
use crate::paint::{Color, Paint};
use crate::random::SeedStream;

use super::Shape;

const MIN_THICKNESS: f64 = 0.5;
const THICKNESS_RANGE: f64 = 1.5;
const LINE_OPACITY: f32 = 0.3;
const LINE_BLUR: f32 = 2.0;

/// Thin full-height white lines at golden-ratio positions.
///
/// Positions ignore the seed; each line's thickness is seeded in
/// `[0.5, 2.0)`. Every line carries a light background blur scaled by
/// `blur_scale`.
pub fn refraction_lines(width: f64, height: f64, count: usize, seed: i64, blur_scale: f32) -> Vec<Shape> {
    space_positions(count, width)
        .into_iter()
        .enumerate()
        .map(|(i, x)| {
            let thickness = MIN_THICKNESS + THICKNESS_RANGE * SeedStream::LINE_THICKNESS.draw(seed, i);
            Shape::new(Rect::new(x, 0.0, thickness, height), vec![Paint::solid(Color::white())])
                .with_opacity(LINE_OPACITY)
                .with_effect(Effect::BackgroundBlur { radius: LINE_BLUR * blur_scale })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_follow_golden_positions() {
        let shapes = refraction_lines(90.0, 30.0, 3, 1, 1.0);
        let xs: Vec<f64> = shapes.iter().map(|s| s.rect.x()).collect();
        assert_eq!(xs, space_positions(3, 90.0));
    }

    #[test]
    fn thickness_in_range_and_full_height() {
        for shape in refraction_lines(400.0, 120.0, 40, 99, 1.0) {
            assert!((0.5..2.0).contains(&shape.rect.width()));
            assert_eq!(shape.rect.height(), 120.0);
            assert_eq!(shape.opacity, LINE_OPACITY);
        }
    }

    #[test]
    fn blur_scales_with_quality() {
        let shapes = refraction_lines(100.0, 10.0, 2, 0, 1.3);
        assert_eq!(shapes[0].effects, vec![Effect::BackgroundBlur { radius: 2.0 * 1.3 }]);
    }

    #[test]
    fn positions_are_seed_independent() {
        let a: Vec<f64> = refraction_lines(100.0, 10.0, 8, 1, 1.0).iter().map(|s| s.rect.x()).collect();
        let b: Vec<f64> = refraction_lines(100.0, 10.0, 8, 2, 1.0).iter().map(|s| s.rect.x()).collect();
        assert_eq!(a, b);
    }
}
