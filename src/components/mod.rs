//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the scene. Transmitters and antennas are independent capabilities: an
//! entity may carry either, both, or neither.
//!
//! Submodules overview:
//! - [`antenna`] – broadcast receiver with a timed linear move state machine
//! - [`boxcollider`] – axis-aligned 3D box that the pick ray can hit
//! - [`label`] – human readable name for logs
//! - [`transmitter`] – broadcast source carrying a code
//! - [`viewer`] – point of view the pick ray is cast from
//! - [`worldposition`] – world-space position of an entity

pub mod antenna;
pub mod boxcollider;
pub mod label;
pub mod transmitter;
pub mod viewer;
pub mod worldposition;
