//! Antenna arrival events.
//!
//! When an antenna's move completes, the
//! [`antenna_motion_system`](crate::systems::antenna::antenna_motion_system)
//! triggers an [`AntennaArrivedEvent`]. Observers can subscribe to it to chain
//! behaviour (sounds, follow-up broadcasts, ...) without polling antenna state.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::label::Label;
use crate::components::worldposition::WorldPosition;

/// Event emitted when an antenna reaches its destination.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct AntennaArrivedEvent {
    /// The antenna entity.
    pub entity: Entity,
    /// The code that made it move.
    pub code: String,
}

/// Observer that logs every arrival with the antenna's label and position.
pub fn observe_antenna_arrival(
    trigger: On<AntennaArrivedEvent>,
    query: Query<(Option<&Label>, Option<&WorldPosition>)>,
) {
    let event = trigger.event();
    let (label, position) = query.get(event.entity).unwrap_or((None, None));
    info!(
        "Antenna {} ('{}') arrived at {:?}",
        label.map(Label::name).unwrap_or("<unnamed>"),
        event.code,
        position.map(|p| p.pos)
    );
}
