//! Scene setup, description files and the frame runner.
//!
//! A [`Scene`] owns the ECS [`World`] and the per-frame [`Schedule`]. The host
//! drives it explicitly: sample the primary button with
//! [`Scene::set_primary_button`], then advance one frame with
//! [`Scene::step`]. No timers or threads live inside.
//!
//! Frame order:
//! 1. [`update_world_time`] – publish the frame delta
//! 2. [`picker_system`] – on a fresh press, cast the view ray and broadcast
//! 3. [`antenna_motion_system`] – tick every moving antenna
//! 4. [`clear_input_edges`] – consume the press
//!
//! A click therefore moves its antennas within the same frame.
//!
//! # Description Format
//!
//! ```json
//! {
//!   "viewer": { "position": [0, 1.7, 0], "facing": [0, 0, -1], "range": 10 },
//!   "entities": [
//!     { "label": "lever", "position": [0, 1, -4],
//!       "collider": { "size": [1, 1, 1] },
//!       "transmitter": { "code": "door" } },
//!     { "label": "door", "position": [2, 0, -6],
//!       "collider": { "size": [2, 3, 0.2] },
//!       "antenna": { "code": "door", "offset": [0, 5, 0], "duration": 2.0 } }
//!   ],
//!   "clicks": [ { "frame": 30 } ]
//! }
//! ```

use bevy_ecs::prelude::*;
use glam::Vec3;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::antenna::Antenna;
use crate::components::boxcollider::{BoxCollider, DEFAULT_LAYER};
use crate::components::label::Label;
use crate::components::transmitter::Transmitter;
use crate::components::viewer::Viewer;
use crate::components::worldposition::WorldPosition;
use crate::events::broadcast::{broadcast, deliver_broadcast};
use crate::resources::antennaregistry::AntennaRegistry;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;
use crate::systems::antenna::{antenna_motion_system, deregister_antenna, register_antenna};
use crate::systems::input::{clear_input_edges, update_input_state};
use crate::systems::picker::{picker_system, primary_action};
use crate::systems::time::update_world_time;

fn default_facing() -> Vec3 {
    Vec3::NEG_Z
}

fn default_layers() -> u32 {
    DEFAULT_LAYER
}

/// Whole scene file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneDescription {
    #[serde(default)]
    pub viewer: Option<ViewerDescription>,
    #[serde(default)]
    pub entities: Vec<EntityDescription>,
    /// Scripted primary actions for headless runs.
    #[serde(default)]
    pub clicks: Vec<ScriptedClick>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ViewerDescription {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default = "default_facing")]
    pub facing: Vec3,
    /// Falls back to [`GameConfig::pick_range`] when absent.
    #[serde(default)]
    pub range: Option<f32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct EntityDescription {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub collider: Option<ColliderDescription>,
    #[serde(default)]
    pub transmitter: Option<TransmitterDescription>,
    #[serde(default)]
    pub antenna: Option<AntennaDescription>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ColliderDescription {
    pub size: Vec3,
    #[serde(default)]
    pub offset: Vec3,
    #[serde(default = "default_layers")]
    pub layers: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransmitterDescription {
    pub code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AntennaDescription {
    pub code: String,
    pub offset: Vec3,
    pub duration: f32,
}

/// A primary action pressed on a given frame, optionally re-aiming first.
///
/// The button is released on the next frame without a click, so clicks on
/// consecutive frames merge into a single press.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScriptedClick {
    pub frame: u64,
    #[serde(default)]
    pub facing: Option<Vec3>,
}

impl SceneDescription {
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse scene: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene file {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}

/// Insert the resources and observers the scene relies on.
///
/// Useful for hosts that manage their own [`World`] and schedule.
pub fn setup_world(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(InputState::default());
    world.insert_resource(AntennaRegistry::default());
    world.insert_resource(config);

    world.add_observer(register_antenna);
    world.add_observer(deregister_antenna);
    world.add_observer(deliver_broadcast);
    // Ensure the observers are registered before anything is spawned or triggered.
    world.flush();
}

/// ECS world plus the per-frame schedule.
pub struct Scene {
    world: World,
    update: Schedule,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Scene {
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        setup_world(&mut world, config);

        let mut update = Schedule::default();
        update.add_systems((picker_system, antenna_motion_system, clear_input_edges).chain());

        Self { world, update }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Spawn the viewer and entities of a description.
    ///
    /// Returns the entities in description order; the viewer is not included.
    pub fn spawn_description(&mut self, description: &SceneDescription) -> Vec<Entity> {
        if let Some(viewer) = &description.viewer {
            self.spawn_viewer(viewer.position, viewer.facing, viewer.range);
        }
        let entities: Vec<Entity> = description
            .entities
            .iter()
            .map(|entity| self.spawn_entity(entity))
            .collect();
        info!(
            "Scene spawned: {} entities, {} antennas",
            entities.len(),
            self.world.resource::<AntennaRegistry>().len()
        );
        entities
    }

    /// Spawn the viewer. Without an explicit `range` it picks as far as
    /// [`GameConfig::pick_range`].
    pub fn spawn_viewer(&mut self, position: Vec3, facing: Vec3, range: Option<f32>) -> Entity {
        let range = range.unwrap_or(self.config().pick_range);
        let viewer = Viewer::new(facing).with_range(range);
        self.world
            .spawn((WorldPosition::from_vec3(position), viewer))
            .id()
    }

    pub fn spawn_entity(&mut self, description: &EntityDescription) -> Entity {
        let mut entity = self
            .world
            .spawn(WorldPosition::from_vec3(description.position));
        if let Some(label) = &description.label {
            entity.insert(Label::new(label.clone()));
        }
        if let Some(collider) = &description.collider {
            entity.insert(
                BoxCollider::new(collider.size.x, collider.size.y, collider.size.z)
                    .with_offset(collider.offset)
                    .with_layers(collider.layers),
            );
        }
        if let Some(transmitter) = &description.transmitter {
            entity.insert(Transmitter::new(transmitter.code.clone()));
        }
        // Antenna last: its start position is captured from WorldPosition on insertion.
        if let Some(antenna) = &description.antenna {
            entity.insert(Antenna::new(
                antenna.code.clone(),
                antenna.offset,
                antenna.duration,
            ));
        }
        entity.id()
    }

    pub fn despawn(&mut self, entity: Entity) -> bool {
        self.world.despawn(entity)
    }

    /// Record the host's primary button state for the next [`Scene::step`].
    pub fn set_primary_button(&mut self, down: bool) {
        update_input_state(&mut self.world, down);
    }

    /// Point the viewer towards `facing`. No-op without a viewer.
    pub fn aim(&mut self, facing: Vec3) {
        let mut query = self.world.query::<&mut Viewer>();
        if let Some(mut viewer) = query.iter_mut(&mut self.world).next() {
            viewer.facing = facing;
        }
    }

    /// Advance the scene by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Pick immediately, outside of the frame loop.
    pub fn primary_action(&mut self, origin: Vec3, direction: Vec3, max_range: f32) -> Option<Entity> {
        primary_action(&mut self.world, origin, direction, max_range)
    }

    /// Broadcast immediately, outside of the frame loop.
    pub fn broadcast(&mut self, code: impl Into<String>) {
        broadcast(&mut self.world, code);
    }

    pub fn antenna(&self, entity: Entity) -> Option<&Antenna> {
        self.world.get::<Antenna>(entity)
    }

    pub fn position(&self, entity: Entity) -> Option<Vec3> {
        self.world.get::<WorldPosition>(entity).map(|p| p.pos)
    }

    /// Run `frames` frames of `dt` seconds, pressing the primary button on
    /// the frames listed in `clicks`.
    pub fn run_script(&mut self, clicks: &[ScriptedClick], frames: u64, dt: f32) {
        for frame in 0..frames {
            let mut clicked = false;
            for click in clicks.iter().filter(|click| click.frame == frame) {
                if let Some(facing) = click.facing {
                    self.aim(facing);
                }
                clicked = true;
            }
            if clicked {
                debug!("Scripted click on frame {}", frame);
            }
            self.set_primary_button(clicked);
            self.step(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"{
        "viewer": { "position": [0, 1, 0] },
        "entities": [
            { "label": "lever", "position": [0, 1, -4],
              "collider": { "size": [1, 1, 1] },
              "transmitter": { "code": "door" } },
            { "label": "door", "position": [3, 0, -4],
              "antenna": { "code": "door", "offset": [0, 5, 0], "duration": 2.0 } }
        ],
        "clicks": [ { "frame": 2 } ]
    }"#;

    #[test]
    fn parses_description_with_defaults() {
        let desc = SceneDescription::from_json_str(DEMO).unwrap();
        let viewer = desc.viewer.as_ref().unwrap();
        assert_eq!(viewer.facing, Vec3::NEG_Z);
        assert_eq!(viewer.range, None);
        assert_eq!(desc.entities.len(), 2);
        let collider = desc.entities[0].collider.as_ref().unwrap();
        assert_eq!(collider.offset, Vec3::ZERO);
        assert_eq!(collider.layers, DEFAULT_LAYER);
        assert!(desc.entities[1].collider.is_none());
        assert_eq!(desc.clicks, vec![ScriptedClick { frame: 2, facing: None }]);
    }

    #[test]
    fn empty_object_is_an_empty_scene() {
        let desc = SceneDescription::from_json_str("{}").unwrap();
        assert!(desc.viewer.is_none());
        assert!(desc.entities.is_empty());
        assert!(desc.clicks.is_empty());
    }

    #[test]
    fn malformed_description_is_an_error() {
        let err = SceneDescription::from_json_str(r#"{ "entities": [ { "antenna": {} } ] }"#)
            .unwrap_err();
        assert!(err.starts_with("Failed to parse scene"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(SceneDescription::load_from_file("/nonexistent/scene.json").is_err());
    }

    #[test]
    fn spawned_antenna_is_registered_and_anchored() {
        let mut scene = Scene::default();
        let desc = SceneDescription::from_json_str(DEMO).unwrap();
        let entities = scene.spawn_description(&desc);

        let door = entities[1];
        assert!(scene.world().resource::<AntennaRegistry>().contains(door));
        assert_eq!(
            scene.antenna(door).unwrap().start_position(),
            Vec3::new(3.0, 0.0, -4.0)
        );
        assert_eq!(
            scene.world().get::<Label>(door).map(Label::name),
            Some("door")
        );
    }

    #[test]
    fn viewer_range_falls_back_to_config() {
        let mut config = GameConfig::default();
        config.pick_range = 3.0;
        let mut scene = Scene::new(config);
        scene.spawn_description(&SceneDescription::from_json_str(DEMO).unwrap());

        let mut query = scene.world_mut().query::<&Viewer>();
        let range = query.iter(scene.world()).next().unwrap().range;
        assert_eq!(range, 3.0);
    }

    #[test]
    fn spawned_viewer_uses_config_range_unless_given() {
        let mut config = GameConfig::default();
        config.pick_range = 4.5;
        let mut scene = Scene::new(config);
        let implicit = scene.spawn_viewer(Vec3::ZERO, Vec3::NEG_Z, None);
        let explicit = scene.spawn_viewer(Vec3::ZERO, Vec3::NEG_Z, Some(2.0));

        assert_eq!(scene.world().get::<Viewer>(implicit).unwrap().range, 4.5);
        assert_eq!(scene.world().get::<Viewer>(explicit).unwrap().range, 2.0);
    }

    #[test]
    fn scripted_click_moves_the_door() {
        let mut scene = Scene::default();
        let desc = SceneDescription::from_json_str(DEMO).unwrap();
        let door = scene.spawn_description(&desc)[1];

        // frames 0..=2 at 0.5s; the click lands on frame 2 and ticks 0.5s
        scene.run_script(&desc.clicks, 3, 0.5);
        assert!(scene.antenna(door).unwrap().is_moving());
        let pos = scene.position(door).unwrap();
        assert!((pos.y - 1.25).abs() < 1e-5);

        scene.run_script(&[], 4, 0.5);
        assert!(!scene.antenna(door).unwrap().is_moving());
        assert_eq!(scene.position(door).unwrap(), Vec3::new(3.0, 5.0, -4.0));
    }
}
