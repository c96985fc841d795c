//! Transmitter tag component.
//!
//! A [`Transmitter`] marks an entity as a broadcast source: when the pick ray
//! hits it, its `code` is sent to every antenna in the scene. It carries no
//! state of its own.

use bevy_ecs::prelude::Component;

/// Passive broadcast source carrying the code sent when it is clicked.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Transmitter {
    pub code: String,
}

impl Transmitter {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}
