//! Click picking.
//!
//! Translates one primary action into at most one broadcast:
//! 1. [`cast_ray`] finds the nearest [`BoxCollider`] along the view ray.
//! 2. If that entity carries a [`Transmitter`], its code is broadcast through
//!    [`broadcast`](crate::events::broadcast::broadcast).
//!
//! Only the nearest hit is considered. An object without a transmitter
//! blocks the ray just like a wall would; nothing behind it is picked.

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info, warn};

use crate::components::boxcollider::{BoxCollider, DEFAULT_LAYER};
use crate::components::transmitter::Transmitter;
use crate::components::viewer::Viewer;
use crate::components::worldposition::WorldPosition;
use crate::events::broadcast::broadcast;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

/// Result of a successful ray cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The entity whose collider was hit.
    pub entity: Entity,
    /// Distance from the ray origin to the hit point.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

impl RayHit {
    /// Look up a component attached to the hit entity.
    pub fn component<'w, T: Component>(&self, world: &'w World) -> Option<&'w T> {
        world.get::<T>(self.entity)
    }

    pub fn has_component<T: Component>(&self, world: &World) -> bool {
        world.get::<T>(self.entity).is_some()
    }
}

/// Cast a ray against every collider on a layer in `layer_mask`.
///
/// Returns the nearest hit within `max_distance`, ties going to the lowest
/// entity id. A zero or non-finite direction, or a range that is not a
/// positive finite number, never hits anything.
pub fn cast_ray(
    world: &mut World,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    layer_mask: u32,
) -> Option<RayHit> {
    if !max_distance.is_finite() || max_distance <= 0.0 || !origin.is_finite() {
        return None;
    }
    let direction = direction.try_normalize()?;

    let mut query = world.query::<(Entity, &WorldPosition, &BoxCollider)>();
    let mut nearest: Option<RayHit> = None;
    for (entity, position, collider) in query.iter(world) {
        if !collider.in_mask(layer_mask) {
            continue;
        }
        let Some(distance) = collider.ray_distance(position.pos, origin, direction, max_distance)
        else {
            continue;
        };
        let closer = match nearest {
            None => true,
            Some(best) => {
                distance < best.distance
                    || (distance == best.distance && entity.to_bits() < best.entity.to_bits())
            }
        };
        if closer {
            nearest = Some(RayHit {
                entity,
                distance,
                point: origin + direction * distance,
            });
        }
    }
    nearest
}

/// Handle one primary action aimed from `origin` along `direction`.
///
/// Broadcasts the code of the transmitter that was hit, if any, and returns
/// its entity. Misses and non-transmitter hits are silent no-ops. The
/// broadcast has reached every antenna by the time this returns.
pub fn primary_action(
    world: &mut World,
    origin: Vec3,
    direction: Vec3,
    max_range: f32,
) -> Option<Entity> {
    let layer_mask = world
        .get_resource::<GameConfig>()
        .map(|config| config.pick_layer_mask)
        .unwrap_or(DEFAULT_LAYER);

    let Some(hit) = cast_ray(world, origin, direction, max_range, layer_mask) else {
        debug!("Pick ray from {} hit nothing", origin);
        return None;
    };
    let Some(code) = hit
        .component::<Transmitter>(world)
        .map(|transmitter| transmitter.code.clone())
    else {
        debug!("Pick ray hit {:?}, which has no transmitter", hit.entity);
        return None;
    };

    info!(
        "Transmitter {:?} clicked at {:.2}m, broadcasting '{}'",
        hit.entity, hit.distance, code
    );
    broadcast(world, code);
    Some(hit.entity)
}

/// Exclusive system firing [`primary_action`] from the scene's [`Viewer`]
/// on the frame the primary button goes down.
pub fn picker_system(world: &mut World) {
    let pressed = world
        .get_resource::<InputState>()
        .is_some_and(|input| input.primary_action.just_pressed);
    if !pressed {
        return;
    }

    let viewer = {
        let mut query = world.query::<(&WorldPosition, &Viewer)>();
        query
            .iter(world)
            .next()
            .map(|(position, viewer)| (position.pos, *viewer))
    };
    let Some((origin, viewer)) = viewer else {
        warn!("Primary action pressed but the scene has no viewer");
        return;
    };

    primary_action(world, origin, viewer.facing, viewer.range);
}
