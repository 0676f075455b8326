// Host-side tests for damped orbit controls.

mod common;

use common::*;
use glam::Vec3;
use scene_core::{Camera, CameraConfig, OrbitConfig, OrbitControls};

fn camera() -> Camera {
    Camera::from_config(&CameraConfig::default(), 16.0 / 9.0)
}

#[test]
fn update_without_input_keeps_camera() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(Vec3::ZERO, OrbitConfig::default());
    let moved = orbit.update(&mut cam);
    assert!(!moved);
    assert!((cam.eye - Vec3::new(5.0, 2.0, 0.0)).length() < 1e-4);
}

#[test]
fn damping_spreads_rotation_over_frames() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(Vec3::ZERO, OrbitConfig::default());
    let radius = cam.eye.length();

    orbit.rotate_by_pixels(120.0, 0.0, 720.0);
    assert!(orbit.update(&mut cam));
    let first_step = cam.eye;

    let mut frames = 1;
    while !orbit.is_settled() && frames < 500 {
        orbit.update(&mut cam);
        frames += 1;
    }
    assert!(orbit.is_settled());
    assert!(frames > 10, "damping should take several frames, took {frames}");
    assert!((cam.eye.length() - radius).abs() < 1e-3);
    assert!(cam.eye.distance(first_step) > 1e-3);
    // horizontal drag keeps the height
    assert!((cam.eye.y - 2.0).abs() < 1e-3);
}

#[test]
fn undamped_rotation_applies_at_once() {
    let mut cam = camera();
    let config = OrbitConfig {
        enable_damping: false,
        ..OrbitConfig::default()
    };
    let mut orbit = OrbitControls::new(Vec3::ZERO, config);
    orbit.rotate_by_pixels(360.0, 0.0, 720.0); // half turn
    orbit.update(&mut cam);
    assert!(orbit.is_settled());
    assert!((cam.eye - Vec3::new(-5.0, 2.0, 0.0)).length() < 1e-3);
}

#[test]
fn dolly_clamps_to_distance_limits() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(Vec3::ZERO, OrbitConfig::default());
    for _ in 0..500 {
        orbit.dolly(-1.0);
        orbit.update(&mut cam);
    }
    assert!((cam.eye.length() - 1.0).abs() < 1e-4);
    for _ in 0..500 {
        orbit.dolly(1.0);
        orbit.update(&mut cam);
    }
    assert!((cam.eye.length() - 50.0).abs() < 1e-2);
}

#[test]
fn polar_angle_never_flips_over_the_pole() {
    let mut cam = camera();
    let mut orbit = OrbitControls::new(Vec3::ZERO, OrbitConfig::default());
    for _ in 0..50 {
        orbit.rotate_by_pixels(0.0, 2000.0, 720.0);
        orbit.update(&mut cam);
    }
    assert!(cam.eye.y > 0.0);
    assert!(cam.eye.is_finite());
    assert!(cam.view_matrix().is_finite());
}

#[test]
fn orbiting_leaves_markers_alone_and_picks_follow() {
    let mut ctx = default_scene(1280.0, 720.0);
    let before = ctx.marker_center("hiddenObject1").unwrap();
    let mut orbit = OrbitControls::new(Vec3::ZERO, OrbitConfig::default());
    orbit.rotate_by_pixels(-40.0, 10.0, 720.0);
    for _ in 0..60 {
        orbit.update(&mut ctx.camera);
    }
    assert_eq!(ctx.marker_center("hiddenObject1").unwrap(), before);
    assert_eq!(ctx.revealed_count(), 0);

    let mut sink = RecordingSink::default();
    let at = screen_of(&ctx, before);
    let result = scene_core::dispatch_click(&mut ctx, at, &mut sink);
    assert_eq!(result.marker, ctx.marker_id("hiddenObject1"));
}
