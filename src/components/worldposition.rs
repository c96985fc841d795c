use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of an entity.
///
/// Colliders are placed relative to this position and the antenna motion
/// system writes the interpolated antenna position back into it every frame.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct WorldPosition {
    pub pos: Vec3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    pub fn from_vec3(pos: Vec3) -> Self {
        Self { pos }
    }
}

impl Default for WorldPosition {
    fn default() -> Self {
        Self { pos: Vec3::ZERO }
    }
}
