//! clickrelay library.
//!
//! Click-driven interaction for a 3D scene hosted in a `bevy_ecs` world: a
//! pick ray that hits a transmitter broadcasts its code, and every antenna
//! whose code matches performs a timed linear move.
//!
//! - [`components`] – transmitter, antenna, collider, viewer and position components
//! - [`events`] – broadcast and arrival events with their observers
//! - [`resources`] – antenna registry, configuration, input and time
//! - [`scene`] – world setup, scene description files and the frame runner
//! - [`systems`] – picking, antenna motion, input and time systems

pub mod components;
pub mod events;
pub mod resources;
pub mod scene;
pub mod systems;
