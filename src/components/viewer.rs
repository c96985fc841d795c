use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Default pick distance in world units.
pub const DEFAULT_PICK_RANGE: f32 = 10.0;

/// The point of view the pick ray is cast from.
///
/// The ray starts at the entity's [`WorldPosition`](super::worldposition::WorldPosition)
/// and travels along `facing` for at most `range` units.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Viewer {
    /// Direction the viewer is looking at. Does not need to be normalized.
    pub facing: Vec3,
    /// Maximum pick distance.
    pub range: f32,
}

impl Viewer {
    /// Viewer with [`DEFAULT_PICK_RANGE`]. `Scene::spawn_viewer` replaces it
    /// with the configured range when none is given.
    pub fn new(facing: Vec3) -> Self {
        Self {
            facing,
            range: DEFAULT_PICK_RANGE,
        }
    }

    pub fn with_range(mut self, range: f32) -> Self {
        self.range = range;
        self
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(Vec3::NEG_Z)
    }
}
