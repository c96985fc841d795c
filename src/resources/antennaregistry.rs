//! Live antenna registry.
//!
//! The [`AntennaRegistry`] resource holds the entity of every antenna
//! currently in the world. Broadcasts iterate this set instead of scanning
//! the whole scene.
//!
//! # How It Works
//!
//! 1. Spawning an entity with an [`Antenna`](crate::components::antenna::Antenna)
//!    fires the [`register_antenna`](crate::systems::antenna::register_antenna) observer,
//!    which inserts the entity here.
//! 2. Removing the component (or despawning the entity) fires
//!    [`deregister_antenna`](crate::systems::antenna::deregister_antenna), which
//!    removes it again.
//!
//! Nothing else mutates the registry, so a broadcast only ever reaches the
//! antennas alive at the moment it is sent.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

/// Set of entities carrying an antenna. Iteration order is unspecified.
#[derive(Debug, Clone, Resource, Default)]
pub struct AntennaRegistry {
    antennas: FxHashSet<Entity>,
}

impl AntennaRegistry {
    /// Adds an antenna entity. Returns `false` if it was already registered.
    pub fn register(&mut self, entity: Entity) -> bool {
        self.antennas.insert(entity)
    }

    /// Removes an antenna entity. Returns `false` if it was not registered.
    pub fn deregister(&mut self, entity: Entity) -> bool {
        self.antennas.remove(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.antennas.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    /// Snapshot of the registered entities.
    pub fn entities(&self) -> Vec<Entity> {
        self.antennas.iter().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.antennas.iter().copied()
    }

    pub fn clear(&mut self) {
        self.antennas.clear();
    }
}
