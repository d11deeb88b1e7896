use serde::{Deserialize, Serialize};

use crate::coords::Rect;
use crate::paint::Color;

/// A fill paint as the host reports it on an existing element.
///
/// Only solid paints matter to palette extraction; every other paint type
/// deserializes to [`SourceFill::Other`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceFill {
    #[serde(rename = "SOLID")]
    Solid {
        /// RGB of the paint; its alpha channel is ignored.
        color: Color,
        /// Paint opacity, `1.0` when the host reports none.
        #[serde(default)]
        opacity: Option<f32>,
    },
    #[serde(other)]
    Other,
}

impl SourceFill {
    /// The paint as a straight-alpha color, if it is solid.
    pub fn solid_color(&self) -> Option<Color> {
        match *self {
            SourceFill::Solid { color, opacity } => Some(color.with_alpha(opacity.unwrap_or(1.0))),
            SourceFill::Other => None,
        }
    }
}

/// Read access to an existing visual element of the host.
///
/// Implemented by host adapters; the generator only reads through it.
pub trait SourceNode {
    /// Position and size, or `None` when the element has no resolvable geometry.
    fn bounds(&self) -> Option<Rect>;

    /// The element's own fill paints, topmost last.
    fn fills(&self) -> Vec<SourceFill>;

    /// Ordered child elements. Leaves return an empty list.
    fn children(&self) -> Vec<&dyn SourceNode>;
}

/// Plain-data element tree, loadable from JSON.
///
/// Missing `x`/`y` read as zero; a node lacking `width` or `height` has no
/// bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fills: Vec<SourceFill>,
    pub children: Vec<StaticNode>,
}

impl StaticNode {
    /// A named element with the given bounds and nothing else.
    pub fn frame(name: impl Into<String>, bounds: Rect) -> Self {
        Self {
            name: name.into(),
            x: bounds.x(),
            y: bounds.y(),
            width: Some(bounds.width()),
            height: Some(bounds.height()),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: SourceFill) -> Self {
        self.fills.push(fill);
        self
    }

    pub fn with_child(mut self, child: StaticNode) -> Self {
        self.children.push(child);
        self
    }
}

impl SourceNode for StaticNode {
    fn bounds(&self) -> Option<Rect> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(Rect::new(self.x, self.y, w, h)),
            _ => None,
        }
    }

    fn fills(&self) -> Vec<SourceFill> {
        self.fills.clone()
    }

    fn children(&self) -> Vec<&dyn SourceNode> {
        self.children.iter().map(|c| c as &dyn SourceNode).collect()
    }
}
