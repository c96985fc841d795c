//! Antenna component: a broadcast receiver that moves when its code is sent.
//!
//! An [`Antenna`] holds a match code, an offset and a move duration. When a
//! broadcast carrying its code reaches it, it switches to
//! [`AntennaState::Moving`] and, tick by tick, linearly interpolates from the
//! position it had when it entered the scene to that position plus `offset`.
//!
//! The interpolated position is never stored: [`Antenna::position`] derives it
//! from the start position, offset, duration and elapsed time on every call.
//! See [`crate::systems::antenna`] for the systems that drive antennas and
//! keep the [`AntennaRegistry`](crate::resources::antennaregistry::AntennaRegistry)
//! in sync.

use bevy_ecs::prelude::Component;
use glam::Vec3;
use log::warn;

/// Shortest move duration in seconds. Shorter, zero, negative or non-finite
/// durations are clamped to this value.
pub const MIN_MOVE_DURATION: f32 = 1e-4;

/// Motion state of an antenna.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum AntennaState {
    /// At rest, either at the start position or at the destination.
    #[default]
    Idle,
    /// Travelling towards `start_position + offset`.
    Moving,
}

/// Broadcast receiver that performs a timed linear move on a matching code.
#[derive(Component, Clone, Debug)]
pub struct Antenna {
    /// Code this antenna reacts to.
    pub code: String,
    offset: Vec3,
    duration: f32,
    start_position: Vec3,
    anchored: bool,
    elapsed: f32,
    state: AntennaState,
}

impl Antenna {
    /// Create an idle antenna.
    ///
    /// The start position is captured from the entity's
    /// [`WorldPosition`](super::worldposition::WorldPosition) when the
    /// component is added to the world.
    pub fn new(code: impl Into<String>, offset: Vec3, duration: f32) -> Self {
        let code = code.into();
        let duration = if duration.is_finite() && duration >= MIN_MOVE_DURATION {
            duration
        } else {
            warn!(
                "Antenna '{}' has invalid move duration {}, clamping to {}s",
                code, duration, MIN_MOVE_DURATION
            );
            MIN_MOVE_DURATION
        };
        Self {
            code,
            offset,
            duration,
            start_position: Vec3::ZERO,
            anchored: false,
            elapsed: 0.0,
            state: AntennaState::Idle,
        }
    }

    /// Builder variant that anchors the start position up front.
    pub fn with_start(mut self, start: Vec3) -> Self {
        self.anchor(start);
        self
    }

    /// Capture the start position. Only the first call has any effect.
    ///
    /// Returns `true` if the position was captured by this call.
    pub fn anchor(&mut self, start: Vec3) -> bool {
        if self.anchored {
            return false;
        }
        self.start_position = start;
        self.anchored = true;
        true
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn destination(&self) -> Vec3 {
        self.start_position + self.offset
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn state(&self) -> AntennaState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == AntennaState::Moving
    }

    /// Fraction of the move covered so far. Not clamped.
    pub fn ratio(&self) -> f32 {
        self.elapsed / self.duration
    }

    /// Current position, derived from elapsed time.
    ///
    /// Once `elapsed` exceeds `duration` this is exactly the destination.
    pub fn position(&self) -> Vec3 {
        if self.elapsed > self.duration {
            self.destination()
        } else {
            self.start_position + self.offset * self.ratio()
        }
    }

    /// React to a broadcast code.
    ///
    /// A matching code puts the antenna in [`AntennaState::Moving`] without
    /// resetting the elapsed time; repeating it while moving changes nothing.
    /// Returns `true` if this call started a move.
    pub fn receive(&mut self, code: &str) -> bool {
        if code != self.code || self.state == AntennaState::Moving {
            return false;
        }
        self.state = AntennaState::Moving;
        true
    }

    /// Advance the move by `dt` seconds. Negative or NaN deltas count as zero.
    ///
    /// Returns `true` if the move finished during this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.state == AntennaState::Idle {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed > self.duration {
            self.state = AntennaState::Idle;
            return true;
        }
        false
    }
}
