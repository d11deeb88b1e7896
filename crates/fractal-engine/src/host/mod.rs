//! Host scene-graph collaborator.
//!
//! The generator never talks to a concrete design tool. It reads existing
//! elements through [`SourceNode`] and writes results through [`SceneHost`];
//! [`SceneGraph`] is the in-memory implementation used by the CLI and tests.

mod graph;
mod materialize;
mod source;

use anyhow::{Result, bail};

use crate::coords::Rect;
use crate::effect::Effect;
use crate::paint::{BlendMode, Paint};

pub use graph::{NodeId, NodeKind, SceneGraph, SceneNode, SceneTree};
pub use materialize::{materialize, preview};
pub use source::{SourceFill, SourceNode, StaticNode};

/// Write access to the host's scene graph.
///
/// Setters take a handle the host gave out earlier. Operations that relate
/// two handles, or that may fail on the host side, return `Result`.
pub trait SceneHost {
    type Node: Copy + Eq + core::fmt::Debug;

    fn create_frame(&mut self) -> Self::Node;
    fn create_rect(&mut self) -> Self::Node;

    fn set_name(&mut self, node: Self::Node, name: &str);
    /// Position and size; positions are relative to the parent.
    fn set_geometry(&mut self, node: Self::Node, rect: Rect);
    fn set_fills(&mut self, node: Self::Node, fills: &[Paint]);
    fn set_opacity(&mut self, node: Self::Node, opacity: f32);
    fn set_blend_mode(&mut self, node: Self::Node, mode: BlendMode);
    fn set_effects(&mut self, node: Self::Node, effects: &[Effect]);

    /// Deep copy of `node` and its subtree, detached from any parent.
    fn clone_node(&mut self, node: Self::Node) -> Result<Self::Node>;
    /// Appends `child` as the last (topmost) child of `parent`.
    fn append_child(&mut self, parent: Self::Node, child: Self::Node) -> Result<()>;
    /// Creates a container holding `children` in order.
    fn group(&mut self, children: &[Self::Node]) -> Result<Self::Node>;

    /// Rendered raster snapshot of `node` at `scale`, for UI previews only.
    fn export_preview(&mut self, node: Self::Node, scale: f32) -> Result<Vec<u8>> {
        let _ = (node, scale);
        bail!("preview export is not supported by this host")
    }
}
