//! Geometry types shared by the generator and host adapters.
//!
//! Canonical space:
//! - Host coordinates (`f64`, same units the scene graph uses)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Layer geometry is expressed relative to the target's own origin; only the
//! result container carries absolute host coordinates.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
