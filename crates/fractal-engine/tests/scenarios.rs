//! End-to-end scenarios: primitives, full generation, materialization.

use fractal_engine::compose::LayerKind;
use fractal_engine::coords::Rect;
use fractal_engine::host::{NodeKind, SceneGraph, SourceFill, StaticNode, materialize};
use fractal_engine::layout::{GOLDEN_RATIO, partition, space_positions};
use fractal_engine::paint::{BlendMode, Color};
use fractal_engine::palette::Palette;
use fractal_engine::settings::ColorMode;
use fractal_engine::{EffectSettings, EffectVariant, GenerateError, generate, generate_for};

// ── primitives ──────────────────────────────────────────────────────────

#[test]
fn scenario_a_uniform_partition() {
    for seed in [0, 1, -42, 1_700_000_000_000] {
        let stripes = partition(100.0, 4, 0.0, seed).unwrap();
        let got: Vec<(f64, f64)> = stripes.iter().map(|s| (s.x, s.width)).collect();
        assert_eq!(got, vec![(0.0, 25.0), (25.0, 25.0), (50.0, 25.0), (75.0, 25.0)]);
    }
}

#[test]
fn scenario_b_black_white_midpoint() {
    let palette = Palette::new(vec![Color::new(0.0, 0.0, 0.0, 1.0), Color::new(1.0, 1.0, 1.0, 1.0)]).unwrap();
    assert_eq!(palette.sample(0.5), Color::new(0.5, 0.5, 0.5, 1.0));
}

#[test]
fn scenario_c_golden_positions() {
    let mut want: Vec<f64> = (0..3).map(|i| (i as f64 * GOLDEN_RATIO).fract() * 90.0).collect();
    want.sort_by(f64::total_cmp);
    let got = space_positions(3, 90.0);
    assert_eq!(got, want);
    assert!(got.iter().all(|&p| (0.0..90.0).contains(&p)));
}

// ── generation ──────────────────────────────────────────────────────────

#[test]
fn every_variant_materializes_under_one_container() {
    let bounds = Rect::new(40.0, 80.0, 360.0, 240.0);
    for variant in [EffectVariant::Gradient, EffectVariant::Fractal, EffectVariant::Glass] {
        let settings = EffectSettings::default().with_seed(2024).with_variant(variant);
        let result = generate(bounds, &settings).unwrap();

        let mut scene = SceneGraph::new();
        let root = materialize(&result, &mut scene).unwrap();
        let tree = scene.tree(root).unwrap();

        assert_eq!(tree.kind, NodeKind::Group);
        assert_eq!(tree.rect, bounds);
        assert_eq!(tree.blend_mode, BlendMode::Overlay);
        assert_eq!(tree.opacity, 0.7);
        assert_eq!(tree.children.len(), result.layers.len());
        for (i, layer) in tree.children.iter().enumerate() {
            assert_eq!(layer.kind, NodeKind::Frame);
            assert_eq!(layer.rect, bounds.local());
            assert_eq!(layer.children.len(), result.shapes(i).len());
        }
    }
}

#[test]
fn gradient_blur_copies_are_host_clones() {
    let settings = EffectSettings::default().with_seed(5).with_variant(EffectVariant::Gradient);
    let result = generate(Rect::new(0.0, 0.0, 200.0, 100.0), &settings).unwrap();

    let mut scene = SceneGraph::new();
    let root = materialize(&result, &mut scene).unwrap();
    let tree = scene.tree(root).unwrap();

    let base = &tree.children[0];
    for copy in &tree.children[1..] {
        assert_eq!(copy.children, base.children);
        assert_eq!(copy.effects.len(), 1);
    }
    let root_node = scene.get(root).unwrap();
    let ids: std::collections::HashSet<_> = root_node.children.iter().collect();
    assert_eq!(ids.len(), root_node.children.len());
}

#[test]
fn stripes_cover_target_width_in_every_variant() {
    let bounds = Rect::new(0.0, 0.0, 777.0, 123.0);
    for variant in [EffectVariant::Gradient, EffectVariant::Glass] {
        let settings = EffectSettings::default().with_seed(31).with_variant(variant);
        let result = generate(bounds, &settings).unwrap();
        let shapes = result.shapes(0);
        let right = shapes.iter().map(|s| s.rect.max().x).fold(0.0, f64::max);
        assert!((right - 777.0).abs() < 1e-6);
        assert!(shapes.iter().all(|s| s.rect.height() == 123.0));
    }
}

#[test]
fn missing_geometry_and_bad_config_are_reported() {
    let settings = EffectSettings::default().with_seed(1);
    let err = generate_for(&StaticNode::default(), &settings).unwrap_err();
    assert!(err.to_string().starts_with("missing target"));

    let err = EffectSettings::from_json(r#"{"quality":"cinematic"}"#).unwrap_err();
    assert!(matches!(err, GenerateError::InvalidConfiguration(_)));
}

#[test]
fn extraction_reads_child_fills() {
    let green = Color::rgb(0.0, 1.0, 0.0);
    let target = StaticNode::frame("hero", Rect::new(0.0, 0.0, 100.0, 100.0))
        .with_child(StaticNode::default().with_fill(SourceFill::Solid { color: green, opacity: Some(0.5) }));
    let settings = EffectSettings {
        color_mode: ColorMode::Extract,
        ..EffectSettings::default().with_seed(3).with_variant(EffectVariant::Gradient)
    };
    let result = generate_for(&target, &settings).unwrap();
    assert_eq!(result.layers[0].kind, LayerKind::GradientStripes);
    let json = serde_json::to_value(&result.shapes(0)[0].fills[0]).unwrap();
    assert_eq!(json["stops"][0]["color"]["a"], 0.5);
}

#[test]
fn repeated_generation_is_idempotent() {
    let settings = EffectSettings::default().with_seed(99);
    let bounds = Rect::new(0.0, 0.0, 512.0, 512.0);
    let a = serde_json::to_string(&generate(bounds, &settings).unwrap()).unwrap();
    let b = serde_json::to_string(&generate(bounds, &settings).unwrap()).unwrap();
    assert_eq!(a, b);
}
