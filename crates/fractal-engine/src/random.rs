//! Seeded scalar generator.
//!
//! `random(seed)` folds a scaled sine of the seed onto `[0, 1)`. It is a pure
//! function, so a given seed reproduces a given pattern on any implementation
//! using the same formula. Independent-looking draws come from offsetting the
//! base seed per use-site and per index, see [`SeedStream`].

/// Deterministic scalar in `[0, 1)` for `seed`.
#[inline]
pub fn random(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Seed derivation for one use-site: `seed + offset + i * stride`.
///
/// Every site that draws per index gets its own stream so that, say, a
/// zone's width and its x position are not the same number.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SeedStream {
    pub offset: i64,
    pub stride: i64,
}

impl SeedStream {
    pub const STRIPE_WIDTH: Self = Self::new(0, 1);

    pub const FROST_TOP: Self = Self::new(101, 7);
    pub const FROST_MID: Self = Self::new(211, 11);
    pub const FROST_BOTTOM: Self = Self::new(307, 13);

    pub const LINE_THICKNESS: Self = Self::new(401, 17);

    pub const ZONE_WIDTH: Self = Self::new(503, 19);
    pub const ZONE_HEIGHT: Self = Self::new(601, 23);
    pub const ZONE_X: Self = Self::new(701, 29);
    pub const ZONE_Y: Self = Self::new(809, 31);

    pub const PANE_ANGLE: Self = Self::new(907, 37);

    #[inline]
    pub const fn new(offset: i64, stride: i64) -> Self {
        Self { offset, stride }
    }

    /// Seed for index `i` derived from `base`. Wraps instead of overflowing.
    #[inline]
    pub fn seed(self, base: i64, i: usize) -> i64 {
        base.wrapping_add(self.offset)
            .wrapping_add((i as i64).wrapping_mul(self.stride))
    }

    /// Draws the scalar for index `i`.
    #[inline]
    pub fn draw(self, base: i64, i: usize) -> f64 {
        random(self.seed(base, i))
    }
}
