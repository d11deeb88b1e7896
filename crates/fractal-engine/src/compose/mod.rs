//! Layer compositing.
//!
//! Responsibilities:
//! - build the shapes of each layer kind (one file per kind)
//! - collect layers in caller order, skipping zero-opacity ones
//! - apply the container-level blend mode and opacity once, at the end
//!
//! Layers never read each other's output. A blurred variant refers to its
//! source layer by index ([`LayerContent::CloneOf`]) and the host clones it.

mod frost;
mod gradient;
mod lines;
mod panes;
pub(crate) mod recipe;
mod result;
mod zones;

pub use frost::frost_stripes;
pub use gradient::gradient_stripes;
pub use lines::refraction_lines;
pub use panes::glass_panes;
pub use result::{GeneratedResult, Layer, LayerContent, LayerKind, Shape};
pub use zones::frost_zones;

use crate::coords::Rect;
use crate::effect::Effect;
use crate::paint::BlendMode;

/// Name given to the result container.
pub const RESULT_NAME: &str = "Fractal Glass Effect";

/// Ordered layer stack under construction.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - clones hold an index, not a copy of the source shapes
#[derive(Debug, Default)]
pub struct Composition {
    layers: Vec<Layer>,
}

impl Composition {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers pushed so far, in stacking order (bottom first).
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Appends a layer and returns its index.
    ///
    /// Layers without positive opacity are skipped and yield `None`.
    pub fn push(&mut self, layer: Layer) -> Option<usize> {
        if !(layer.opacity > 0.0) {
            log::trace!("skipping {:?} layer with opacity {}", layer.kind, layer.opacity);
            return None;
        }
        self.layers.push(layer);
        Some(self.layers.len() - 1)
    }

    /// Appends a shape layer.
    pub fn push_shapes(&mut self, kind: LayerKind, opacity: f32, shapes: Vec<Shape>) -> Option<usize> {
        self.push(Layer {
            kind,
            opacity,
            effects: Vec::new(),
            content: LayerContent::Shapes(shapes),
        })
    }

    /// Appends an independent copy of layer `source` with its own opacity and effects.
    ///
    /// # Panics
    /// Panics (debug only) if `source` does not name an earlier layer.
    pub fn push_clone(
        &mut self,
        source: usize,
        kind: LayerKind,
        opacity: f32,
        effects: Vec<Effect>,
    ) -> Option<usize> {
        debug_assert!(source < self.layers.len(), "push_clone source {source} out of range");
        self.push(Layer {
            kind,
            opacity,
            effects,
            content: LayerContent::CloneOf(source),
        })
    }

    /// Wraps the stack in the result container.
    pub fn finish(self, bounds: Rect, blend_mode: BlendMode, opacity: f32) -> GeneratedResult {
        GeneratedResult {
            name: RESULT_NAME.to_owned(),
            bounds,
            blend_mode,
            opacity,
            layers: self.layers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes_layer(opacity: f32) -> Layer {
        Layer {
            kind: LayerKind::GradientStripes,
            opacity,
            effects: Vec::new(),
            content: LayerContent::Shapes(Vec::new()),
        }
    }

    #[test]
    fn push_returns_indices_in_order() {
        let mut c = Composition::new();
        assert_eq!(c.push(shapes_layer(1.0)), Some(0));
        assert_eq!(c.push(shapes_layer(0.5)), Some(1));
        assert_eq!(c.layers().len(), 2);
    }

    #[test]
    fn zero_opacity_is_not_instantiated() {
        let mut c = Composition::new();
        assert_eq!(c.push(shapes_layer(0.0)), None);
        assert_eq!(c.push(shapes_layer(-1.0)), None);
        assert_eq!(c.push(shapes_layer(f32::NAN)), None);
        assert!(c.layers().is_empty());
    }

    #[test]
    fn clone_refers_to_source() {
        let mut c = Composition::new();
        let base = c.push(shapes_layer(1.0)).unwrap();
        let blur = vec![Effect::LayerBlur { radius: 20.0 }];
        let idx = c.push_clone(base, LayerKind::BlurCopy, 0.8, blur.clone()).unwrap();
        let layer = &c.layers()[idx];
        assert_eq!(layer.content, LayerContent::CloneOf(base));
        assert_eq!(layer.effects, blur);
        assert_eq!(layer.opacity, 0.8);
    }

    #[test]
    fn finish_applies_container_policy() {
        let mut c = Composition::new();
        c.push(shapes_layer(1.0));
        let bounds = Rect::new(10.0, 20.0, 300.0, 200.0);
        let result = c.finish(bounds, BlendMode::Screen, 0.7);
        assert_eq!(result.name, RESULT_NAME);
        assert_eq!(result.bounds, bounds);
        assert_eq!(result.blend_mode, BlendMode::Screen);
        assert_eq!(result.opacity, 0.7);
        assert_eq!(result.layers.len(), 1);
    }
}
