/// `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Low-discrepancy positions across `[0, total_width)`, sorted ascending.
///
/// Position `i` is `frac(i * φ) * total_width`. No seed is involved: line
/// spacing looks organic without per-call randomness, and callers seed only
/// per-line attributes.
pub fn space_positions(count: usize, total_width: f64) -> Vec<f64> {
    let mut positions: Vec<f64> = (0..count)
        .map(|i| (i as f64 * GOLDEN_RATIO).fract() * total_width)
        .collect();
    positions.sort_by(f64::total_cmp);
    positions
}
