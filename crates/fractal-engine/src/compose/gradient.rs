use crate::coords::Rect;
use crate::layout::StripeSpec;
use crate::paint::{ColorStop, LinearGradient, Paint};
use crate::palette::Palette;

use super::Shape;

/// Distance along the palette between a stripe's top and bottom colors.
const STRIPE_SPAN: f64 = 0.25;

/// One full-height rectangle per stripe, filled with a two-stop vertical
/// gradient sampled from `palette`.
///
/// Stripe `i` of `n` starts at `t0 = (i / max(1, n - 1) + offset_pct / 100) mod 1`
/// and ends at `(t0 + 0.25) mod 1`.
pub fn gradient_stripes(stripes: &[StripeSpec], height: f64, palette: &Palette, offset_pct: f64) -> Vec<Shape> {
    let denom = stripes.len().saturating_sub(1).max(1) as f64;
    let offset = offset_pct / 100.0;

    stripes
        .iter()
        .enumerate()
        .map(|(i, stripe)| {
            let t0 = (i as f64 / denom + offset).rem_euclid(1.0);
            let t1 = (t0 + STRIPE_SPAN).rem_euclid(1.0);

            let gradient = LinearGradient::vertical(vec![
                ColorStop::new(0.0, palette.sample(t0)),
                ColorStop::new(1.0, palette.sample(t1)),
            ]);
            debug_assert!(gradient.is_valid(), "stripe {i} built a degenerate gradient");
            Shape::new(Rect::new(stripe.x, 0.0, stripe.width, height), vec![Paint::LinearGradient(gradient)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::partition;
    use crate::paint::Color;

    fn stops(shape: &Shape) -> (Color, Color) {
        match &shape.fills[..] {
            [Paint::LinearGradient(g)] => (g.stops[0].color, g.stops[1].color),
            other => panic!("unexpected fills {other:?}"),
        }
    }

    #[test]
    fn one_rect_per_stripe_full_height() {
        let stripes = partition(100.0, 4, 0.0, 0).unwrap();
        let shapes = gradient_stripes(&stripes, 60.0, &Palette::default(), 0.0);
        assert_eq!(shapes.len(), 4);
        for (shape, stripe) in shapes.iter().zip(&stripes) {
            assert_eq!(shape.rect, Rect::new(stripe.x, 0.0, stripe.width, 60.0));
            assert_eq!(shape.opacity, 1.0);
        }
    }

    #[test]
    fn colors_walk_the_palette() {
        let bw = Palette::new(vec![Color::black(), Color::white()]).unwrap();
        let stripes = partition(50.0, 5, 0.0, 0).unwrap();
        let shapes = gradient_stripes(&stripes, 10.0, &bw, 0.0);

        // t0 = 0, 0.25, 0.5, 0.75, 0.0 (1 mod 1)
        assert_eq!(stops(&shapes[0]), (Color::black(), bw.sample(0.25)));
        assert_eq!(stops(&shapes[2]).0, bw.sample(0.5));
        assert_eq!(stops(&shapes[3]).1, Color::black());
        assert_eq!(stops(&shapes[4]).0, Color::black());
    }

    #[test]
    fn offset_shifts_start() {
        let bw = Palette::new(vec![Color::black(), Color::white()]).unwrap();
        let stripes = partition(10.0, 1, 0.0, 0).unwrap();
        let shapes = gradient_stripes(&stripes, 10.0, &bw, 50.0);
        assert_eq!(stops(&shapes[0]).0, bw.sample(0.5));
    }

    #[test]
    fn gradient_is_vertical() {
        let stripes = partition(10.0, 2, 0.0, 0).unwrap();
        let shapes = gradient_stripes(&stripes, 10.0, &Palette::default(), 0.0);
        let Paint::LinearGradient(g) = &shapes[0].fills[0] else { panic!("expected gradient") };
        assert!(g.is_valid());
        assert_eq!(g.start.x, g.end.x);
    }
}
