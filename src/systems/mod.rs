//! Scene systems.
//!
//! This module groups the ECS systems and observers that advance the
//! simulation each frame.
//!
//! Submodules overview
//! - [`antenna`] – tick moving antennas, keep the antenna registry up to date
//! - [`input`] – record the host's primary button state and clear its edges
//! - [`picker`] – cast the view ray and broadcast the transmitter code it hits
//! - [`time`] – update simulation time and delta

pub mod antenna;
pub mod input;
pub mod picker;
pub mod time;
