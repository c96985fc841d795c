//! Event types and observers used by the scene.
//!
//! Events provide a decoupled way for the picker, the antennas and any host
//! code to communicate without direct dependencies.
//!
//! Submodules:
//! - [`antenna`] – notification emitted when an antenna finishes its move
//! - [`broadcast`] – code broadcast and the observer delivering it to antennas
pub mod antenna;
pub mod broadcast;
