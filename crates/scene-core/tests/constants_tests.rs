// Host-side tests for startup constants and the marker table.

use scene_core::constants::*;
use scene_core::{SceneConfig, DEFAULT_MARKERS};
use std::collections::HashSet;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_sane() {
    assert!(CAMERA_FOV_DEGREES > 0.0 && CAMERA_FOV_DEGREES < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    assert!(DEFAULT_VIEWPORT_WIDTH > 0.0 && DEFAULT_VIEWPORT_HEIGHT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn orbit_constants_have_logical_relationships() {
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR < 1.0);
    assert!(ORBIT_MAX_DISTANCE > ORBIT_MIN_DISTANCE);
    assert!(ORBIT_MIN_DISTANCE > 0.0);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
}

#[test]
fn camera_starts_within_orbit_range() {
    let config = SceneConfig::default();
    let distance = config.camera.position.distance(config.camera.target);
    assert!(distance >= config.orbit.min_distance);
    assert!(distance <= config.orbit.max_distance);
}

#[test]
fn bloom_defaults() {
    let bloom = SceneConfig::default().bloom;
    assert_eq!(bloom.strength, 1.5);
    assert_eq!(bloom.radius, 0.4);
    assert_eq!(bloom.threshold, 0.85);
}

#[test]
fn marker_keys_are_unique() {
    let keys: HashSet<_> = DEFAULT_MARKERS.iter().map(|m| m.key).collect();
    assert_eq!(keys.len(), DEFAULT_MARKERS.len());
    assert_eq!(DEFAULT_MARKERS.len(), 4);
}

#[test]
fn every_marker_owns_its_scale() {
    let scale = |key: &str| {
        DEFAULT_MARKERS
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.scale)
            .unwrap()
    };
    assert_eq!(scale("hiddenObject1"), 0.1);
    assert_eq!(scale("hiddenObject2"), 0.12);
    assert_eq!(scale("hiddenObject3"), 1.0);
    assert_eq!(scale("hiddenObject4"), 1.0);
}

#[test]
fn markers_have_messages_and_positive_radius() {
    for m in DEFAULT_MARKERS.iter() {
        assert!(!m.message.is_empty(), "{}", m.key);
        assert!(m.effective_radius() > 0.0, "{}", m.key);
    }
}
