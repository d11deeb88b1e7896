use anyhow::{Context, Result};

use crate::compose::{GeneratedResult, LayerContent};

use super::SceneHost;

/// Builds `result` in `host` and returns the container node.
///
/// Shape layers become a frame of rectangles; clone layers become a host
/// clone of their source layer with the clone's own opacity and effects.
/// Layers are grouped bottom to top, then the container gets the result's
/// name, bounds, blend mode and opacity.
pub fn materialize<H: SceneHost>(result: &GeneratedResult, host: &mut H) -> Result<H::Node> {
    let local = result.bounds.local();
    let mut nodes: Vec<H::Node> = Vec::with_capacity(result.layers.len());

    for (i, layer) in result.layers.iter().enumerate() {
        let node = match &layer.content {
            LayerContent::Shapes(shapes) => {
                let frame = host.create_frame();
                host.set_geometry(frame, local);
                host.set_fills(frame, &[]);
                for shape in shapes {
                    let rect = host.create_rect();
                    host.set_geometry(rect, shape.rect);
                    host.set_fills(rect, &shape.fills);
                    host.set_opacity(rect, shape.opacity);
                    host.set_effects(rect, &shape.effects);
                    host.append_child(frame, rect)
                        .with_context(|| format!("adding shape to layer {i}"))?;
                }
                frame
            }
            LayerContent::CloneOf(source) => {
                let source_node = nodes
                    .get(*source)
                    .copied()
                    .with_context(|| format!("layer {i} clones layer {source}, which is not built yet"))?;
                host.clone_node(source_node)
                    .with_context(|| format!("cloning layer {source} for layer {i}"))?
            }
        };

        host.set_name(node, layer.kind.label());
        host.set_opacity(node, layer.opacity);
        host.set_effects(node, &layer.effects);
        nodes.push(node);
    }

    let container = host.group(&nodes).context("grouping generated layers")?;
    host.set_name(container, &result.name);
    host.set_geometry(container, result.bounds);
    host.set_blend_mode(container, result.blend_mode);
    host.set_opacity(container, result.opacity);

    log::debug!("materialized {} layers ({} shapes)", nodes.len(), result.shape_count());
    Ok(container)
}

/// Best-effort preview export.
///
/// A failing export is logged and reported as `None`; it never affects
/// generation.
pub fn preview<H: SceneHost>(host: &mut H, node: H::Node, scale: f32) -> Option<Vec<u8>> {
    match host.export_preview(node, scale) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::warn!("preview export failed: {e:#}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Composition, Layer, LayerKind, Shape};
    use crate::coords::Rect;
    use crate::effect::Effect;
    use crate::host::{NodeKind, SceneGraph};
    use crate::paint::{BlendMode, Color, Paint};

    fn two_stripes() -> Vec<Shape> {
        vec![
            Shape::new(Rect::new(0.0, 0.0, 5.0, 10.0), vec![Paint::solid(Color::black())]),
            Shape::new(Rect::new(5.0, 0.0, 5.0, 10.0), vec![Paint::solid(Color::white())]),
        ]
    }

    #[test]
    fn builds_layers_and_clones() {
        let mut c = Composition::new();
        let base = c.push_shapes(LayerKind::GradientStripes, 1.0, two_stripes()).unwrap();
        c.push_clone(base, LayerKind::BlurCopy, 0.4, vec![Effect::LayerBlur { radius: 20.0 }]);
        let result = c.finish(Rect::new(100.0, 50.0, 10.0, 10.0), BlendMode::Overlay, 0.7);

        let mut g = SceneGraph::new();
        let root = materialize(&result, &mut g).unwrap();
        let tree = g.tree(root).unwrap();

        assert_eq!(tree.kind, NodeKind::Group);
        assert_eq!(tree.name, result.name);
        assert_eq!(tree.rect, result.bounds);
        assert_eq!(tree.blend_mode, BlendMode::Overlay);
        assert_eq!(tree.opacity, 0.7);
        assert_eq!(tree.children.len(), 2);

        let (base, blur) = (&tree.children[0], &tree.children[1]);
        assert_eq!(base.children.len(), 2);
        assert!(base.effects.is_empty());
        assert_eq!(base.opacity, 1.0);
        assert_eq!(blur.children, base.children);
        assert_eq!(blur.effects, vec![Effect::LayerBlur { radius: 20.0 }]);
        assert_eq!(blur.opacity, 0.4);
        assert_eq!(blur.name, "Blur Copy");
    }

    #[test]
    fn empty_result_is_an_empty_group() {
        let result = Composition::new().finish(Rect::new(0.0, 0.0, 0.0, 0.0), BlendMode::Normal, 1.0);
        let mut g = SceneGraph::new();
        let root = materialize(&result, &mut g).unwrap();
        assert!(g.tree(root).unwrap().children.is_empty());
    }

    #[test]
    fn forward_clone_reference_fails() {
        let mut result = Composition::new().finish(Rect::new(0.0, 0.0, 10.0, 10.0), BlendMode::Normal, 1.0);
        result.layers.push(Layer {
            kind: LayerKind::BlurCopy,
            opacity: 1.0,
            effects: Vec::new(),
            content: LayerContent::CloneOf(3),
        });
        let mut g = SceneGraph::new();
        let err = materialize(&result, &mut g).unwrap_err();
        assert!(format!("{err:#}").contains("clones layer 3"));
    }

    #[test]
    fn preview_failure_is_swallowed() {
        let mut g = SceneGraph::new();
        let frame = g.create_frame();
        assert_eq!(preview(&mut g, frame, 2.0), None);
    }
}
