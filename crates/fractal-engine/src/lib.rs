//! Fractal glass engine.
//!
//! Procedurally generates a layered, glass-like overlay for a rectangular
//! target. Everything is a pure function of the target bounds and an
//! [`EffectSettings`] record, including its integer seed.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`random`] | seeded scalar generator, per-site seed streams |
//! | [`quality`] | `QualityTier` → `QualityProfile` |
//! | [`layout`] | stripe partition, golden-ratio spacing |
//! | [`palette`] | palette sampling and extraction |
//! | [`compose`] | layer builders, `GeneratedResult` |
//! | [`host`] | host traits, in-memory `SceneGraph`, `materialize` |
//! | [`generate`] | `generate` / `generate_for` entry points |
//!
//! # Quick start
//!
//! ```rust
//! use fractal_engine::coords::Rect;
//! use fractal_engine::host::{SceneGraph, materialize};
//! use fractal_engine::{EffectSettings, generate};
//!
//! let settings = EffectSettings::default().with_seed(7);
//! let result = generate(Rect::new(0.0, 0.0, 320.0, 200.0), &settings).unwrap();
//!
//! let mut scene = SceneGraph::new();
//! let root = materialize(&result, &mut scene).unwrap();
//! assert_eq!(scene.tree(root).unwrap().children.len(), result.layers.len());
//! ```

pub mod compose;
pub mod coords;
pub mod effect;
pub mod error;
pub mod generate;
pub mod host;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod palette;
pub mod quality;
pub mod random;
pub mod settings;

pub use compose::GeneratedResult;
pub use error::GenerateError;
pub use generate::{generate, generate_for};
pub use settings::{EffectSettings, EffectVariant, defaults};
