//! Idle spin for vortex and teleport tiles.
//!
//! A half-turn per second, looping until the component is removed.
//! Re-inserting a fresh [`Spin`] resets the phase; every hazard re-contact
//! does exactly that, so the rotation visibly restarts.

use bevy_ecs::prelude::Component;

/// Seconds per half-turn of the idle rotation.
pub const HALF_TURN_SECS: f32 = 1.0;

/// Endless rotation driven by [`crate::systems::spin::spin_system`].
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    /// Seconds one half-turn takes.
    pub half_turn_secs: f32,
    /// Time since the spin (re)started.
    pub elapsed: f32,
}

impl Spin {
    pub fn new() -> Self {
        Self {
            half_turn_secs: HALF_TURN_SECS,
            elapsed: 0.0,
        }
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_phase_zero() {
        let spin = Spin::new();
        assert_eq!(spin.elapsed, 0.0);
        assert_eq!(spin.half_turn_secs, HALF_TURN_SECS);
    }
}
