//! Headless scene runner.
//!
//! Drives the full frame loop against in-memory surfaces: the animation
//! controller picks `t`, the renderer draws the scene, and the decomposition
//! plot draws each control point's share of the curve. Halfway through, a
//! simulated drag moves control point C so the plot cache is rebuilt.
//!
//! Usage:
//! ```text
//! cargo run --example scene                       # default scene
//! cargo run --example scene -- path/to/scene.json # custom config
//! RUST_LOG=casteljau=debug cargo run --example scene
//! ```

use std::path::PathBuf;

use casteljau::geometry::PointLabel;
use casteljau::math::Point2;
use casteljau::render::{DecompositionPlot, RecordingSurface, Renderer};
use casteljau::scene::{AnimationController, Scene, SceneConfig};
use casteljau::Result;

const FRAMES: usize = 300;
const CANVAS: (f64, f64) = (600.0, 400.0);
const PLOT: (f64, f64) = (600.0, 150.0);

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for casteljau.
    // Override with RUST_LOG env var (e.g. RUST_LOG=casteljau=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("scene=info".parse().unwrap_or_default())
        .add_directive("casteljau=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .map_or_else(SceneConfig::default, |path| {
            SceneConfig::load_or_default(&path)
        });

    let mut scene = Scene::from_config(&config);
    let mut renderer = Renderer::attach(Some(RecordingSurface::new(CANVAS.0, CANVAS.1)))?
        .with_tessellation(config.tessellation)?;
    let mut plot_surface = RecordingSurface::new(PLOT.0, PLOT.1);
    let mut plot = DecompositionPlot::new();
    let mut controller = AnimationController::new(config.animation)?;
    let range = AnimationController::sample_range(config.animation)?;

    let mut primitives = 0;
    let mut rebuilds = 0;
    for frame in 0..FRAMES {
        if frame == FRAMES / 2 {
            let c = scene.control_point(PointLabel::C).position;
            scene.begin_drag(c);
            scene.drag_to(Point2::new(c.x + 60.0, c.y + 20.0));
            scene.end_drag();
        }

        let t = controller.next_t(config.animation)?;
        renderer.draw_frame(&scene, &config.flags, t)?;
        primitives += renderer.surface().primitives().len();

        if plot.update(&scene, range)? {
            rebuilds += 1;
        }
        plot.draw(&mut plot_surface, &scene, range, t)?;
    }

    let last = plot.evaluation_at(0.5)?;
    let shares = DecompositionPlot::contribution_shares(&last)?;
    tracing::info!(
        frames = FRAMES,
        primitives,
        plot_rebuilds = rebuilds,
        ?shares,
        "scene run complete"
    );
    Ok(())
}
