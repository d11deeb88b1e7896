use crate::paint::Color;

use super::Palette;

impl Palette {
    /// Continuous color at `t` along the palette.
    ///
    /// `t` is clamped to `[0, 1]` and mapped onto `[0, len - 1]`; the two
    /// bracketing colors are interpolated channel by channel with the
    /// fractional remainder as weight. A one-color palette returns that
    /// color for every `t`.
    pub fn sample(&self, t: f64) -> Color {
        let colors = self.colors();
        let last = colors.len() - 1;
        if last == 0 {
            return colors[0];
        }

        // NaN clamps to 0.
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * last as f64;
        let i = (scaled.floor() as usize).min(last);
        let j = (i + 1).min(last);
        let local = (scaled - i as f64) as f32;

        colors[i].lerp(colors[j], local)
    }
}
