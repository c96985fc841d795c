//! Per-frame input resource.
//!
//! The core has no input device of its own. The host samples its "primary
//! action" button (mouse button, trigger, key...) once per frame and feeds
//! the raw down/up state in through [`BoolState::update`]. Press and release
//! edges are derived here so a held button only fires once.
use bevy_ecs::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state with edge detection.
pub struct BoolState {
    /// Whether the button is currently held down.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Record the sampled button state and derive the edges from the
    /// previous one.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }

    /// Forget this frame's edges, keeping the held state.
    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-frame input relevant to picking.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub primary_action: BoolState,
}
