use crate::pick::closest_hit;
use crate::scene::{ObjectId, SceneContext};
use glam::Vec2;

/// Document-level layer that shows the reveal text.
pub trait UiSink {
    /// Make the message panel visible with `text`. Idempotent if already shown.
    fn show_message(&mut self, text: &str);
    /// Hide the panel. Driven by the panel's close control, never by a pick.
    fn hide_message(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickResult {
    pub marker: Option<ObjectId>,
    pub screen: Vec2,
}

impl PickResult {
    fn miss(screen: Vec2) -> Self {
        Self {
            marker: None,
            screen,
        }
    }
}

/// Resolve a click at viewport pixel `screen` and reveal the marker under it.
///
/// Emits at most one `show_message` call. Clicks outside the viewport, on
/// empty space, or on non-marker geometry change nothing.
pub fn dispatch_click(ctx: &mut SceneContext, screen: Vec2, sink: &mut dyn UiSink) -> PickResult {
    let Some(ndc) = ctx.viewport.to_ndc(screen) else {
        log::debug!("[pick] ignoring click outside viewport at {:?}", screen);
        return PickResult::miss(screen);
    };
    let ray = ctx.camera.ray_through_ndc(ndc);
    let Some(hit) = closest_hit(&ray, ctx.objects()) else {
        log::debug!("[pick] no intersection at ndc=({:.3},{:.3})", ndc.x, ndc.y);
        return PickResult::miss(screen);
    };
    let Some(handler) = ctx.handler_mut(hit.object) else {
        log::debug!("[pick] closest object {:?} is not a marker", hit.object);
        return PickResult::miss(screen);
    };
    let first = handler.reveal();
    log::info!(
        "[pick] {} revealed (first={}) at distance {:.3}",
        handler.key,
        first,
        hit.distance
    );
    sink.show_message(&handler.message);
    PickResult {
        marker: Some(hit.object),
        screen,
    }
}
