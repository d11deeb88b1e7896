use serde::{Deserialize, Serialize};

use crate::coords::Rect;
use crate::effect::Effect;
use crate::paint::{BlendMode, Paint};

/// One rectangle of a layer, positioned relative to the target's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub rect: Rect,
    /// Empty for fully transparent shapes.
    pub fills: Vec<Paint>,
    pub opacity: f32,
    pub effects: Vec<Effect>,
}

impl Shape {
    /// Opaque shape with the given fills and no effects.
    pub fn new(rect: Rect, fills: Vec<Paint>) -> Self {
        Self { rect, fills, opacity: 1.0, effects: Vec::new() }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// What a layer depicts.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    GradientStripes,
    /// Blurred copy of another layer.
    BlurCopy,
    FrostStripes,
    RefractionLines,
    FrostZones,
    GlassPanes,
}

impl LayerKind {
    /// Node name used when the layer is materialized.
    pub fn label(self) -> &'static str {
        match self {
            LayerKind::GradientStripes => "Gradient Stripes",
            LayerKind::BlurCopy => "Blur Copy",
            LayerKind::FrostStripes => "Frost Stripes",
            LayerKind::RefractionLines => "Refraction Lines",
            LayerKind::FrostZones => "Frost Zones",
            LayerKind::GlassPanes => "Glass Panes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LayerContent {
    Shapes(Vec<Shape>),
    /// Index of an earlier layer in the same result.
    CloneOf(usize),
}

/// One visual sub-result with its own opacity and layer-level effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub kind: LayerKind,
    pub opacity: f32,
    pub effects: Vec<Effect>,
    pub content: LayerContent,
}

/// The composited output: a container holding the layers bottom to top.
///
/// `blend_mode` and `opacity` apply to the container as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedResult {
    pub name: String,
    /// Absolute host position and size of the container.
    pub bounds: Rect,
    pub blend_mode: BlendMode,
    pub opacity: f32,
    pub layers: Vec<Layer>,
}

impl GeneratedResult {
    /// True when no layer was instantiated.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Shapes of layer `index`, following clone references.
    pub fn shapes(&self, index: usize) -> &[Shape] {
        let mut seen = 0;
        let mut current = index;
        while let Some(layer) = self.layers.get(current) {
            match layer.content {
                LayerContent::Shapes(ref shapes) => return shapes,
                LayerContent::CloneOf(source) => {
                    seen += 1;
                    if seen > self.layers.len() {
                        break;
                    }
                    current = source;
                }
            }
        }
        &[]
    }

    /// Total number of shapes across layers, counting clones.
    pub fn shape_count(&self) -> usize {
        (0..self.layers.len()).map(|i| self.shapes(i).len()).sum()
    }
}
