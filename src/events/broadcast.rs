//! Broadcast event and its delivery observer.
//!
//! Triggering a [`BroadcastEvent`] hands its code to every antenna listed in
//! the [`AntennaRegistry`]. Observers run immediately, so the delivery is
//! complete by the time `World::trigger` returns: no antenna ever sees a
//! partial broadcast, and antennas spawned afterwards never see it at all.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(deliver_broadcast);
//! broadcast(&mut world, "door");
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::antenna::Antenna;
use crate::components::label::Label;
use crate::resources::antennaregistry::AntennaRegistry;

/// Event carrying a code to every live antenna.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct BroadcastEvent {
    pub code: String,
}

/// Global observer delivering a [`BroadcastEvent`] to every registered antenna.
///
/// Each antenna only compares the code with its own; the outcome does not
/// depend on the order in which the registry is walked. A registry entry
/// whose antenna is gone is logged and skipped without affecting the others.
pub fn deliver_broadcast(
    trigger: On<BroadcastEvent>,
    registry: Res<AntennaRegistry>,
    mut antennas: Query<(&mut Antenna, Option<&Label>)>,
) {
    let code = trigger.event().code.as_str();
    let mut started = 0usize;
    for entity in registry.iter() {
        let Ok((mut antenna, label)) = antennas.get_mut(entity) else {
            warn!("Broadcast '{}': registered antenna {:?} is gone", code, entity);
            continue;
        };
        if antenna.receive(code) {
            started += 1;
            debug!(
                "Antenna {} started moving on '{}'",
                label.map(Label::name).unwrap_or("<unnamed>"),
                code
            );
        }
    }
    debug!(
        "Broadcast '{}' delivered to {} antennas, {} started moving",
        code,
        registry.len(),
        started
    );
}

/// Send `code` to every live antenna, synchronously.
///
/// Requires [`deliver_broadcast`] to be registered as an observer.
pub fn broadcast(world: &mut World, code: impl Into<String>) {
    world.trigger(BroadcastEvent { code: code.into() });
}
