//! Antenna systems and registry observers.
//!
//! - [`antenna_motion_system`] advances every moving antenna by the frame
//!   delta from [`WorldTime`] and writes the result to its [`WorldPosition`].
//! - [`register_antenna`] / [`deregister_antenna`] keep the
//!   [`AntennaRegistry`] in step with antenna spawns and despawns, and capture
//!   each antenna's start position whenever one is inserted, including when
//!   it replaces an existing antenna on the same entity.

use bevy_ecs::lifecycle::{Insert, Remove};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec3;
use log::debug;

use crate::components::antenna::Antenna;
use crate::components::worldposition::WorldPosition;
use crate::events::antenna::AntennaArrivedEvent;
use crate::resources::antennaregistry::AntennaRegistry;
use crate::resources::worldtime::WorldTime;

/// Tick moving antennas and update their positions.
///
/// Every antenna is ticked with the same delta. Each one only reads its own
/// state, so the iteration order has no effect on the result.
pub fn antenna_motion_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Antenna, Option<&mut WorldPosition>)>,
    mut commands: Commands,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut antenna, position) in query.iter_mut() {
        if !antenna.is_moving() {
            continue;
        }
        let arrived = antenna.tick(dt);
        if let Some(mut position) = position {
            position.pos = antenna.position();
        }
        if arrived {
            commands.trigger(AntennaArrivedEvent {
                entity,
                code: antenna.code.clone(),
            });
        }
    }
}

/// Observer run when an [`Antenna`] is inserted on an entity.
///
/// Fires for replacements too, so a new antenna inserted over an old one is
/// anchored at the entity's current [`WorldPosition`] (the origin if it has
/// none). The entity is added to the [`AntennaRegistry`] if not already there.
pub fn register_antenna(
    insert: On<Insert, Antenna>,
    mut registry: ResMut<AntennaRegistry>,
    mut antennas: Query<(&mut Antenna, Option<&WorldPosition>)>,
) {
    let entity = insert.entity;
    if let Ok((mut antenna, position)) = antennas.get_mut(entity) {
        let start = position.map(|p| p.pos).unwrap_or(Vec3::ZERO);
        if antenna.anchor(start) {
            debug!("Antenna {:?} anchored at {}", entity, start);
        }
    }
    registry.register(entity);
}

/// Observer run when an [`Antenna`] is removed, including on despawn.
pub fn deregister_antenna(remove: On<Remove, Antenna>, mut registry: ResMut<AntennaRegistry>) {
    if registry.deregister(remove.entity) {
        debug!("Antenna {:?} left the scene", remove.entity);
    }
}
