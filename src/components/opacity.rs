//! Opacity component for render modulation.
//!
//! The [`Opacity`] component holds the alpha channel the renderer applies
//! when drawing an entity. The animation sequencer fades it during pickup
//! and goal sequences.

use bevy_ecs::prelude::Component;

/// Alpha channel in the 0.0 (invisible) to 1.0 (opaque) range.
#[derive(Component, Clone, Debug, Copy)]
pub struct Opacity {
    pub alpha: f32,
}

impl Opacity {
    pub fn new(alpha: f32) -> Self {
        Self { alpha }
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}
