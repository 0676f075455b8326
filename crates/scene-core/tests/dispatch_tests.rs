// Host-side tests for click-to-reveal dispatch against a synthetic scene.

mod common;

use common::*;
use glam::{Vec2, Vec3};
use scene_core::{
    dispatch_click, MarkerSpec, MeshData, MeshVertex, SceneConfig, SceneContext, SceneRoot,
    Viewport, DEFAULT_MARKERS,
};

#[test]
fn each_marker_reveals_only_itself() {
    for spec in DEFAULT_MARKERS.iter() {
        let mut ctx = default_scene(1280.0, 720.0);
        let mut sink = RecordingSink::default();
        let at = screen_of(&ctx, spec.center());

        let result = dispatch_click(&mut ctx, at, &mut sink);

        assert_eq!(result.marker, ctx.marker_id(spec.key), "{}", spec.key);
        assert_eq!(result.screen, at);
        assert_eq!(revealed_keys(&ctx), vec![spec.key]);
        assert_eq!(sink.shown, vec![spec.message.to_string()]);
    }
}

#[test]
fn intro_marker_from_default_camera() {
    let mut ctx = default_scene(1280.0, 720.0);
    assert_eq!(ctx.camera.eye, Vec3::new(5.0, 2.0, 0.0));
    assert_eq!(ctx.camera.target, Vec3::ZERO);
    let center = ctx.marker_center("hiddenObject3").unwrap();
    assert_eq!(center, Vec3::new(1.0, -0.8, -0.5));

    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, center);
    dispatch_click(&mut ctx, at, &mut sink);

    assert!(ctx.marker("hiddenObject3").unwrap().revealed);
    assert_eq!(sink.shown.len(), 1);
    assert!(sink.shown[0].starts_with("Hii! My name is Pallavi Singh."));
}

#[test]
fn empty_space_changes_nothing() {
    let mut ctx = default_scene(1280.0, 720.0);
    let mut sink = RecordingSink::default();

    // top-left corner looks well above every marker
    let result = dispatch_click(&mut ctx, Vec2::new(2.0, 2.0), &mut sink);

    assert!(result.marker.is_none());
    assert!(sink.shown.is_empty());
    assert_eq!(ctx.revealed_count(), 0);
}

#[test]
fn malformed_and_out_of_canvas_clicks_are_ignored() {
    let mut ctx = default_scene(1280.0, 720.0);
    let mut sink = RecordingSink::default();
    for at in [
        Vec2::new(-10.0, 300.0),
        Vec2::new(640.0, 9000.0),
        Vec2::new(f32::NAN, 300.0),
        Vec2::new(f32::INFINITY, f32::NEG_INFINITY),
    ] {
        let result = dispatch_click(&mut ctx, at, &mut sink);
        assert!(result.marker.is_none());
    }
    assert!(sink.shown.is_empty());
    assert_eq!(ctx.revealed_count(), 0);
}

#[test]
fn reclick_repeats_message_and_stays_revealed() {
    let mut ctx = default_scene(1280.0, 720.0);
    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, ctx.marker_center("hiddenObject1").unwrap());

    dispatch_click(&mut ctx, at, &mut sink);
    dispatch_click(&mut ctx, at, &mut sink);

    assert!(ctx.marker("hiddenObject1").unwrap().revealed);
    assert_eq!(ctx.revealed_count(), 1);
    assert_eq!(sink.shown.len(), 2);
    assert_eq!(sink.shown[0], sink.shown[1]);
    assert_eq!(sink.hides, 0);
}

fn stacked_markers() -> (MarkerSpec, MarkerSpec) {
    let eye = Vec3::new(5.0, 2.0, 0.0);
    let dir = (Vec3::ZERO - eye).normalize();
    let spec = |key, t: f32, message| MarkerSpec {
        key,
        position: (eye + dir * t).to_array(),
        radius: 0.2,
        scale: 1.0,
        width_segments: 8,
        height_segments: 8,
        color: [1.0, 1.0, 1.0],
        message,
    };
    (spec("near", 3.0, "near message"), spec("far", 4.0, "far message"))
}

#[test]
fn overlapping_markers_resolve_to_nearest_in_any_order() {
    let (near, far) = stacked_markers();
    for order in [[near, far], [far, near]] {
        let mut ctx =
            SceneContext::with_markers(&SceneConfig::default(), Viewport::new(800.0, 600.0), &order);
        let mut sink = RecordingSink::default();
        let at = screen_of(&ctx, near.center());

        let result = dispatch_click(&mut ctx, at, &mut sink);

        assert_eq!(result.marker, ctx.marker_id("near"));
        assert!(ctx.marker("near").unwrap().revealed);
        assert!(!ctx.marker("far").unwrap().revealed);
        assert_eq!(sink.shown, vec!["near message".to_string()]);
    }
}

#[test]
fn resize_keeps_markers_and_picks_stay_correct() {
    let mut ctx = default_scene(1280.0, 720.0);
    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, ctx.marker_center("hiddenObject2").unwrap());
    dispatch_click(&mut ctx, at, &mut sink);

    let centers_before: Vec<_> = DEFAULT_MARKERS
        .iter()
        .map(|m| ctx.marker_center(m.key).unwrap())
        .collect();

    ctx.resize(Viewport::new(600.0, 900.0));
    assert!((ctx.camera.aspect - 600.0 / 900.0).abs() < 1e-6);

    let centers_after: Vec<_> = DEFAULT_MARKERS
        .iter()
        .map(|m| ctx.marker_center(m.key).unwrap())
        .collect();
    assert_eq!(centers_before, centers_after);
    assert_eq!(revealed_keys(&ctx), vec!["hiddenObject2"]);

    let at = screen_of(&ctx, ctx.marker_center("hiddenObject4").unwrap());
    let result = dispatch_click(&mut ctx, at, &mut sink);
    assert_eq!(result.marker, ctx.marker_id("hiddenObject4"));
    assert_eq!(revealed_keys(&ctx), vec!["hiddenObject2", "hiddenObject4"]);
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut ctx = default_scene(1280.0, 720.0);
    ctx.resize(Viewport::new(0.0, 0.0));
    assert_eq!(ctx.viewport, Viewport::new(1280.0, 720.0));
}

#[test]
fn unsized_canvas_starts_with_default_viewport() {
    let mut ctx = default_scene(0.0, 0.0);
    assert_eq!(ctx.viewport, Viewport::default());
    assert!((ctx.camera.aspect - 1280.0 / 720.0).abs() < 1e-6);

    let mut sink = RecordingSink::default();
    let center = ctx.marker_center("hiddenObject3").unwrap();
    let at = screen_of(&ctx, center);
    let result = dispatch_click(&mut ctx, at, &mut sink);
    assert_eq!(result.marker, ctx.marker_id("hiddenObject3"));
    assert_eq!(sink.shown.len(), 1);
}

/// Large quad in the plane x = `x`, facing the default camera.
fn wall(x: f32) -> SceneRoot {
    let v = |y: f32, z: f32| MeshVertex {
        position: [x, y, z],
        normal: [1.0, 0.0, 0.0],
        color: [0.5, 0.5, 0.5, 1.0],
    };
    SceneRoot {
        mesh: MeshData {
            vertices: vec![v(-5.0, -5.0), v(5.0, -5.0), v(5.0, 5.0), v(-5.0, 5.0)],
            indices: vec![0, 1, 2, 0, 2, 3],
        },
        primitive_count: 1,
    }
}

#[test]
fn model_geometry_in_front_absorbs_click() {
    let mut ctx = default_scene(1280.0, 720.0);
    ctx.attach_model(&wall(3.0));
    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, ctx.marker_center("hiddenObject3").unwrap());

    let result = dispatch_click(&mut ctx, at, &mut sink);

    assert!(result.marker.is_none());
    assert!(sink.shown.is_empty());
    assert_eq!(ctx.revealed_count(), 0);
}

#[test]
fn model_geometry_behind_marker_does_not_interfere() {
    let mut ctx = default_scene(1280.0, 720.0);
    ctx.attach_model(&wall(-3.0));
    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, ctx.marker_center("hiddenObject3").unwrap());

    let result = dispatch_click(&mut ctx, at, &mut sink);

    assert_eq!(result.marker, ctx.marker_id("hiddenObject3"));
    assert_eq!(sink.shown.len(), 1);
}

#[test]
fn attaching_model_twice_replaces_it() {
    let mut ctx = default_scene(1280.0, 720.0);
    let markers = ctx.objects().len();
    ctx.attach_model(&wall(3.0));
    ctx.attach_model(&wall(-3.0));
    assert!(ctx.has_model());
    assert_eq!(ctx.objects().len(), markers + 1);

    // the front wall is gone, so the marker is reachable again
    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, ctx.marker_center("hiddenObject3").unwrap());
    dispatch_click(&mut ctx, at, &mut sink);
    assert!(ctx.marker("hiddenObject3").unwrap().revealed);
}
