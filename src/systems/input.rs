//! Input systems.
//!
//! - [`update_input_state`] records the host's sampled primary button state
//!   into [`crate::resources::input::InputState`].
//! - [`clear_input_edges`] runs at the end of the frame so a press is only
//!   seen by one frame even if the host does not sample again.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;

/// Feed the sampled primary button state into the `InputState` resource.
pub fn update_input_state(world: &mut World, primary_down: bool) {
    world
        .resource_mut::<InputState>()
        .primary_action
        .update(primary_down);
}

/// Forget this frame's press/release edges.
pub fn clear_input_edges(mut input: ResMut<InputState>) {
    input.primary_action.clear_edges();
}
