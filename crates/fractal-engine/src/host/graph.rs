use anyhow::{Context, Result, ensure};
use serde::Serialize;

use crate::coords::Rect;
use crate::effect::Effect;
use crate::paint::{BlendMode, Paint};

use super::SceneHost;

/// Handle into a [`SceneGraph`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct NodeId(pub u32);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Frame,
    Rectangle,
    Group,
}

/// One element of the in-memory scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub name: String,
    pub rect: Rect,
    pub fills: Vec<Paint>,
    pub opacity: f32,
    pub blend_mode: BlendMode,
    pub effects: Vec<Effect>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

impl SceneNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: String::new(),
            rect: Rect::default(),
            fills: Vec::new(),
            opacity: 1.0,
            blend_mode: BlendMode::PassThrough,
            effects: Vec::new(),
            children: Vec::new(),
            parent: None,
        }
    }
}

/// Owned, nested snapshot of a subtree; what the CLI prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneTree {
    pub kind: NodeKind,
    pub name: String,
    pub rect: Rect,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    pub opacity: f32,
    pub blend_mode: BlendMode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneTree>,
}

/// Arena-backed scene graph implementing [`SceneHost`].
///
/// Node ids are arena indices and stay valid for the graph's lifetime;
/// nothing is ever removed.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize)
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn node(&self, id: NodeId) -> Result<&SceneNode> {
        self.get(id).with_context(|| format!("unknown node {id:?}"))
    }

    fn insert(&mut self, node: SceneNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn update(&mut self, id: NodeId, f: impl FnOnce(&mut SceneNode)) {
        match self.get_mut(id) {
            Some(node) => f(node),
            None => log::warn!("SceneGraph: ignoring update of unknown node {id:?}"),
        }
    }

    fn detach(&mut self, child: NodeId) {
        let parent = self.get(child).and_then(|n| n.parent);
        if let Some(parent) = parent {
            self.update(parent, |p| p.children.retain(|&c| c != child));
        }
        self.update(child, |c| c.parent = None);
    }

    /// True if `ancestor` is `node` or one of its parents.
    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Nested snapshot of `id` and everything under it.
    pub fn tree(&self, id: NodeId) -> Option<SceneTree> {
        let node = self.get(id)?;
        Some(SceneTree {
            kind: node.kind,
            name: node.name.clone(),
            rect: node.rect,
            fills: node.fills.clone(),
            opacity: node.opacity,
            blend_mode: node.blend_mode,
            effects: node.effects.clone(),
            children: node.children.iter().filter_map(|&c| self.tree(c)).collect(),
        })
    }
}

impl SceneHost for SceneGraph {
    type Node = NodeId;

    fn create_frame(&mut self) -> NodeId {
        self.insert(SceneNode::new(NodeKind::Frame))
    }

    fn create_rect(&mut self) -> NodeId {
        self.insert(SceneNode::new(NodeKind::Rectangle))
    }

    fn set_name(&mut self, node: NodeId, name: &str) {
        self.update(node, |n| n.name = name.to_owned());
    }

    fn set_geometry(&mut self, node: NodeId, rect: Rect) {
        self.update(node, |n| n.rect = rect);
    }

    fn set_fills(&mut self, node: NodeId, fills: &[Paint]) {
        self.update(node, |n| n.fills = fills.to_vec());
    }

    fn set_opacity(&mut self, node: NodeId, opacity: f32) {
        self.update(node, |n| n.opacity = opacity);
    }

    fn set_blend_mode(&mut self, node: NodeId, mode: BlendMode) {
        self.update(node, |n| n.blend_mode = mode);
    }

    fn set_effects(&mut self, node: NodeId, effects: &[Effect]) {
        self.update(node, |n| n.effects = effects.to_vec());
    }

    fn clone_node(&mut self, node: NodeId) -> Result<NodeId> {
        let mut copy = self.node(node)?.clone();
        let children = std::mem::take(&mut copy.children);
        copy.parent = None;

        let id = self.insert(copy);
        for child in children {
            let child_copy = self.clone_node(child)?;
            self.update(child_copy, |c| c.parent = Some(id));
            self.update(id, |n| n.children.push(child_copy));
        }
        Ok(id)
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        ensure!(!self.is_ancestor(child, parent), "cannot append {child:?} under its own descendant {parent:?}");

        self.detach(child);
        self.update(child, |c| c.parent = Some(parent));
        self.update(parent, |p| p.children.push(child));
        Ok(())
    }

    fn group(&mut self, children: &[NodeId]) -> Result<NodeId> {
        let group = self.insert(SceneNode::new(NodeKind::Group));
        for &child in children {
            self.append_child(group, child)
                .with_context(|| format!("grouping {child:?}"))?;
        }
        Ok(group)
    }
}
