use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Collision layer every collider belongs to unless told otherwise.
pub const DEFAULT_LAYER: u32 = 1;

/// Axis-aligned box collider, centred on the entity position plus `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    /// Full extents of the box along each axis.
    pub size: Vec3,
    pub offset: Vec3,
    /// Bitmask of the collision layers this collider is on.
    pub layers: u32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, height, depth),
            offset: Vec3::ZERO,
            layers: DEFAULT_LAYER,
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_layers(mut self, layers: u32) -> Self {
        self.layers = layers;
        self
    }

    /// Whether this collider is on any of the layers in `mask`.
    pub fn in_mask(&self, mask: u32) -> bool {
        self.layers & mask != 0
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec3) -> (Vec3, Vec3) {
        let center = position + self.offset;
        let half = self.size.abs() * 0.5;
        (center - half, center + half)
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec3, point: Vec3) -> bool {
        let (min, max) = self.aabb(position);
        point.cmpge(min).all() && point.cmple(max).all()
    }

    /// Distance along a ray to the first face of the box, if it is hit within
    /// `max_distance`.
    ///
    /// `direction` must be normalized. A ray starting inside the box does not
    /// hit it.
    pub fn ray_distance(
        &self,
        position: Vec3,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<f32> {
        if self.contains_point(position, origin) {
            return None;
        }
        let (min, max) = self.aabb(position);
        let mut t_near = 0.0_f32;
        let mut t_far = max_distance;
        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            if d.abs() < f32::EPSILON {
                // Parallel to this slab: must already be between its planes.
                if o < min[axis] || o > max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (min[axis] - o) * inv;
            let mut t1 = (max[axis] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return None;
            }
        }
        Some(t_near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn aabb_is_centred_on_position_plus_offset() {
        let c = BoxCollider::new(2.0, 4.0, 6.0).with_offset(Vec3::new(1.0, 0.0, 0.0));
        let (min, max) = c.aabb(Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(min, Vec3::new(10.0, 8.0, 7.0));
        assert_eq!(max, Vec3::new(12.0, 12.0, 13.0));
    }

    #[test]
    fn negative_size_is_normalized() {
        let c = BoxCollider::new(-2.0, 2.0, -2.0);
        let (min, max) = c.aabb(Vec3::ZERO);
        assert_eq!(min, Vec3::splat(-1.0));
        assert_eq!(max, Vec3::splat(1.0));
    }

    #[test]
    fn ray_hits_front_face() {
        let c = BoxCollider::new(1.0, 1.0, 1.0);
        let d = c
            .ray_distance(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::NEG_Z, 10.0)
            .unwrap();
        assert!((d - 4.5).abs() < EPSILON);
    }

    #[test]
    fn ray_misses_box_beyond_range() {
        let c = BoxCollider::new(1.0, 1.0, 1.0);
        let hit = c.ray_distance(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::NEG_Z, 4.0);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_misses_box_behind_origin() {
        let c = BoxCollider::new(1.0, 1.0, 1.0);
        let hit = c.ray_distance(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::NEG_Z, 10.0);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_misses_box_to_the_side() {
        let c = BoxCollider::new(1.0, 1.0, 1.0);
        let hit = c.ray_distance(Vec3::new(3.0, 0.0, -5.0), Vec3::ZERO, Vec3::NEG_Z, 10.0);
        assert!(hit.is_none());
    }

    #[test]
    fn diagonal_ray_hits() {
        let c = BoxCollider::new(1.0, 1.0, 1.0);
        let dir = Vec3::new(1.0, 0.0, -1.0).normalize();
        let hit = c.ray_distance(Vec3::new(3.0, 0.0, -3.0), Vec3::ZERO, dir, 10.0);
        assert!(hit.is_some());
    }

    #[test]
    fn ray_starting_inside_does_not_hit() {
        let c = BoxCollider::new(4.0, 4.0, 4.0);
        let hit = c.ray_distance(Vec3::ZERO, Vec3::ZERO, Vec3::X, 10.0);
        assert!(hit.is_none());
    }

    #[test]
    fn layer_mask_filtering() {
        let c = BoxCollider::new(1.0, 1.0, 1.0).with_layers(0b100);
        assert!(!c.in_mask(DEFAULT_LAYER));
        assert!(c.in_mask(0b110));
        assert!(BoxCollider::new(1.0, 1.0, 1.0).in_mask(DEFAULT_LAYER));
    }
}
