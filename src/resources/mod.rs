//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems and observers during execution.
//!
//! Overview
//! - `antennaregistry` – set of live antenna entities targeted by broadcasts
//! - `gameconfig` – picking and simulation settings loaded from `config.ini`
//! - `input` – per-frame primary action button state
//! - `worldtime` – simulation time and delta
pub mod antennaregistry;
pub mod gameconfig;
pub mod input;
pub mod worldtime;
