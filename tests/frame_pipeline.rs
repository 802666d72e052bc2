#![allow(clippy::unwrap_used)]

use approx::assert_abs_diff_eq;
use casteljau::geometry::{Color, Curve, PointLabel};
use casteljau::math::Point2;
use casteljau::render::{DecompositionPlot, RecordingSurface, Renderer};
use casteljau::scene::{AnimationController, AnimationMode, RenderFlags, Scene, SceneConfig};

fn config() -> SceneConfig {
    SceneConfig::from_json(
        r#"{
            "flags": {
                "show_intermediate_points": true,
                "show_intermediate_lines": true,
                "show_primary_lines": true,
                "show_bernstein": true
            },
            "animation": { "type": "auto", "speed": 2.0 }
        }"#,
    )
    .unwrap()
}

#[test]
fn animated_curve_point_follows_the_curve() {
    let config = config();
    let scene = Scene::from_config(&config);
    let mut renderer = Renderer::attach(Some(RecordingSurface::new(600.0, 400.0))).unwrap();
    let mut controller = AnimationController::new(config.animation).unwrap();
    let curve = scene.curve();

    for _ in 0..60 {
        let t = controller.next_t(config.animation).unwrap();
        renderer.draw_frame(&scene, &config.flags, t).unwrap();

        let drawn: Vec<&Point2> = renderer.surface().points_with_color(Color::CYAN).collect();
        assert_eq!(drawn.len(), 1);
        let expected = curve.evaluate(t);
        assert_abs_diff_eq!(drawn[0].x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(drawn[0].y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn dragging_a_point_rebuilds_the_plot() {
    let config = config();
    let mut scene = Scene::from_config(&config);
    let mut plot = DecompositionPlot::new();
    let range = AnimationController::sample_range(config.animation).unwrap();

    assert!(plot.update(&scene, range).unwrap());
    let before = plot.evaluation_at(0.4).unwrap();
    assert!(!plot.update(&scene, range).unwrap());

    assert_eq!(scene.begin_drag(Point2::new(101.0, -2.0)), Some(PointLabel::D));
    scene.drag_to(Point2::new(160.0, -60.0));
    scene.end_drag();

    assert!(plot.update(&scene, range).unwrap());
    let after = plot.evaluation_at(0.4).unwrap();
    assert_ne!(before, after);
    assert_eq!(after.reconstruct(), after.point);
}

#[test]
fn mode_switch_resamples_at_slider_resolution() {
    let auto = AnimationMode::Auto { speed: 1.0 };
    let manual = AnimationMode::Manual { displacement: 30.0 };
    let scene = Scene::default();
    let mut plot = DecompositionPlot::new();
    let mut controller = AnimationController::new(auto).unwrap();

    controller.next_t(auto).unwrap();
    plot.update(&scene, AnimationController::sample_range(auto).unwrap())
        .unwrap();
    let auto_series = plot.series(&scene, 100.0, 100.0).unwrap();
    assert_eq!(auto_series[0].points.len(), 126);

    assert_abs_diff_eq!(controller.next_t(manual).unwrap(), 0.3);
    assert!(plot
        .update(&scene, AnimationController::sample_range(manual).unwrap())
        .unwrap());
    let manual_series = plot.series(&scene, 100.0, 100.0).unwrap();
    assert_eq!(manual_series[0].points.len(), 101);
}

#[test]
fn contribution_chain_and_plot_agree_on_recentering() {
    let scene = Scene::default();
    let flags = RenderFlags {
        show_curve_path: false,
        show_bernstein: true,
        ..RenderFlags::default()
    };
    let mut renderer = Renderer::attach(Some(RecordingSurface::new(600.0, 400.0))).unwrap();
    renderer.draw_frame(&scene, &flags, 0.25).unwrap();

    let mut plot = DecompositionPlot::new();
    let manual = AnimationMode::Manual { displacement: 25.0 };
    plot.update(&scene, AnimationController::sample_range(manual).unwrap())
        .unwrap();
    let eval = plot.evaluation_at(0.25).unwrap();

    for label in PointLabel::ALL {
        let color = scene.control_point(label).color;
        let (from, to) = renderer.surface().lines_with_color(color).next().unwrap();
        let drawn = to - from;
        let expected = eval.contribution(label);
        assert_abs_diff_eq!(drawn.x, expected.x, epsilon = 1e-9);
        assert_abs_diff_eq!(drawn.y, expected.y, epsilon = 1e-9);
    }
}

#[test]
fn missing_surface_stops_the_session() {
    assert!(Renderer::<RecordingSurface>::attach(None).is_err());
}
