#![allow(dead_code)]

use glam::{Vec2, Vec3};
use scene_core::{SceneConfig, SceneContext, UiSink, Viewport, DEFAULT_MARKERS};

/// Sink that records every call instead of touching a document.
#[derive(Default)]
pub struct RecordingSink {
    pub shown: Vec<String>,
    pub hides: usize,
}

impl UiSink for RecordingSink {
    fn show_message(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
    fn hide_message(&mut self) {
        self.hides += 1;
    }
}

pub fn default_scene(width: f32, height: f32) -> SceneContext {
    SceneContext::with_markers(
        &SceneConfig::default(),
        Viewport::new(width, height),
        &DEFAULT_MARKERS,
    )
}

/// Viewport pixel where `world` lands with the context's current camera.
pub fn screen_of(ctx: &SceneContext, world: Vec3) -> Vec2 {
    let ndc = ctx
        .camera
        .project(world)
        .expect("point should be in front of the camera");
    ctx.viewport.from_ndc(ndc)
}

pub fn revealed_keys(ctx: &SceneContext) -> Vec<&'static str> {
    let mut keys: Vec<_> = DEFAULT_MARKERS
        .iter()
        .filter(|m| ctx.marker(m.key).map(|h| h.revealed).unwrap_or(false))
        .map(|m| m.key)
        .collect();
    keys.sort();
    keys
}
