//! fractal-glass - generate a fractal glass overlay from the command line
//!
//! # Usage
//!
//! ```bash
//! # Overlay for a 640x480 region, default settings, fixed seed
//! fractal-glass --width 640 --height 480 --seed 42
//!
//! # Read the target element (and its fills) from JSON, extract colors
//! fractal-glass --target card.json --settings glass.json --variant gradient
//!
//! # Print the declarative result instead of the built scene
//! fractal-glass --width 300 --height 200 --format result
//! ```
//!
//! Settings files hold an `EffectSettings` record in camelCase JSON; every
//! field is optional. Flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;

use fractal_engine::coords::Rect;
use fractal_engine::effect::Effect;
use fractal_engine::host::{SceneGraph, StaticNode, materialize, preview};
use fractal_engine::logging::{LoggingConfig, init_logging};
use fractal_engine::quality::QualityTier;
use fractal_engine::{EffectSettings, EffectVariant, GenerateError, GeneratedResult, generate, generate_for};

/// Generate a layered fractal glass overlay
#[derive(Parser, Debug)]
#[command(name = "fractal-glass")]
#[command(about = "Generate a layered fractal glass overlay")]
#[command(version)]
struct Cli {
    /// Target element as JSON (x, y, width, height, fills, children)
    #[arg(long, conflicts_with_all = ["x", "y", "width", "height"])]
    target: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    x: f64,

    #[arg(long, default_value_t = 0.0)]
    y: f64,

    #[arg(long)]
    width: Option<f64>,

    #[arg(long)]
    height: Option<f64>,

    /// Effect settings as JSON
    #[arg(long, short)]
    settings: Option<PathBuf>,

    /// gradient, fractal or glass
    #[arg(long)]
    variant: Option<EffectVariant>,

    /// draft, standard or high
    #[arg(long)]
    quality: Option<QualityTier>,

    #[arg(long, allow_hyphen_values = true)]
    seed: Option<i64>,

    /// What to print on stdout
    #[arg(long, value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Also request a raster preview from the host (best effort)
    #[arg(long)]
    preview: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The materialized scene graph
    Tree,
    /// The declarative generation result
    Result,
    /// One line per layer
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::verbosity(cli.verbose));

    let settings = load_settings(&cli)?;
    let result = match &cli.target {
        Some(path) => {
            let node: StaticNode = read_json(path)?;
            generate_for(&node, &settings)?
        }
        None => generate(target_bounds(&cli)?, &settings)?,
    };
    log::info!(
        "generated {} layers, {} shapes (seed {})",
        result.layers.len(),
        result.shape_count(),
        settings.seed
    );

    match cli.format {
        Format::Result => println!("{}", serde_json::to_string_pretty(&result)?),
        Format::Summary => print_summary(&result),
        Format::Tree => {
            let mut scene = SceneGraph::new();
            let root = materialize(&result, &mut scene).context("building scene")?;
            if cli.preview && preview(&mut scene, root, 1.0).is_none() {
                log::info!("no preview available");
            }
            let tree = scene.tree(root).context("generated root vanished from scene")?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> Result<EffectSettings> {
    let mut settings = match &cli.settings {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            EffectSettings::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => EffectSettings::default(),
    };

    if let Some(variant) = cli.variant {
        settings.variant = variant;
    }
    if let Some(quality) = cli.quality {
        settings.quality = quality;
    }
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    Ok(settings)
}

fn target_bounds(cli: &Cli) -> Result<Rect, GenerateError> {
    match (cli.width, cli.height) {
        (Some(w), Some(h)) => Ok(Rect::new(cli.x, cli.y, w, h)),
        _ => Err(GenerateError::MissingTarget(
            "pass --target or both --width and --height".to_owned(),
        )),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

fn print_summary(result: &GeneratedResult) {
    let b = result.bounds;
    println!(
        "{} at ({}, {}) {}x{}  blend {:?}  opacity {:.2}",
        result.name,
        b.x(),
        b.y(),
        b.width(),
        b.height(),
        result.blend_mode,
        result.opacity
    );
    for (i, layer) in result.layers.iter().enumerate() {
        let shapes = result.shapes(i);
        println!(
            "  [{i}] {:<18} opacity {:.2}  shapes {:>4}  blur {}",
            layer.kind.label(),
            layer.opacity,
            shapes.len(),
            blur_label(layer.effects.iter().chain(shapes.iter().flat_map(|s| &s.effects)))
        );
    }
}

/// Largest blur radius among `effects`, or "-" when none blurs.
fn blur_label<'a>(effects: impl Iterator<Item = &'a Effect>) -> String {
    effects
        .filter_map(Effect::blur_radius)
        .reduce(f32::max)
        .map_or_else(|| "-".to_owned(), |r| format!("{r:.1}"))
}
