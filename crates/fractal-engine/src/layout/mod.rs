//! One-dimensional geometry across the target's width.
//!
//! - `stripes`: seeded, renormalized partition into vertical stripes
//! - `spacing`: seed-independent golden-ratio positions for line layers

pub mod spacing;
pub mod stripes;

pub use spacing::{GOLDEN_RATIO, space_positions};
pub use stripes::{StripeSpec, partition, stripe_count};
