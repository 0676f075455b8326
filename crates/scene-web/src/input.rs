use glam::Vec2;

/// Pointer drag tracking for the orbit controls.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pos: Vec2) {
        self.active = true;
        self.last = pos;
    }

    /// Movement since the previous pointer position, while dragging.
    pub fn move_to(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.active || !pos.is_finite() {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}
