//! Per-tick input sample resource.
//!
//! The host input layer (touch handling, motion sensor polling) writes the
//! latest 2D samples here; the gravity controller reads whichever one the
//! configured strategy wants. Absence of a sample is a valid state and
//! simply leaves world gravity unchanged.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Latest known pointer position and tilt acceleration, if any.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct InputState {
    /// Last pointer/touch position in world coordinates. Cleared when a
    /// respawn or teleport hands control back to the player.
    pub pointer: Option<Vec2>,
    /// Latest raw tilt-sensor acceleration.
    pub tilt: Option<Vec2>,
}

impl InputState {
    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn clear_pointer(&mut self) {
        self.pointer = None;
    }

    pub fn set_tilt(&mut self, accel: Vec2) {
        self.tilt = Some(accel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_samples() {
        let input = InputState::default();
        assert!(input.pointer.is_none());
        assert!(input.tilt.is_none());
    }

    #[test]
    fn test_set_and_clear_pointer() {
        let mut input = InputState::default();
        input.set_pointer(Vec2::new(10.0, 20.0));
        assert_eq!(input.pointer, Some(Vec2::new(10.0, 20.0)));
        input.clear_pointer();
        assert!(input.pointer.is_none());
    }
}
