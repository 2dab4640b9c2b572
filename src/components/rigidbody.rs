//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the state the movement driver
//! integrates each tick: velocity, linear damping, and whether the body is
//! dynamic at all. Static bodies (walls and special tiles) never move.
//!
//! The `frozen` flag temporarily suspends integration for a dynamic body
//! while its position is controlled externally, e.g. while the animation
//! sequencer is dragging the player into a vortex.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity, damping and mobility flags for one entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vec2,
    /// Velocity damping factor, applied as `velocity *= 1 - damping * dt`.
    pub linear_damping: f32,
    /// Static bodies are never integrated.
    pub dynamic: bool,
    /// When true, the movement driver skips this body entirely.
    pub frozen: bool,
}

impl RigidBody {
    /// An immovable body (walls, tiles).
    pub fn new_static() -> Self {
        Self {
            velocity: Vec2::ZERO,
            linear_damping: 0.0,
            dynamic: false,
            frozen: false,
        }
    }

    /// A gravity-driven body with the given damping.
    pub fn new_dynamic(linear_damping: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            linear_damping,
            dynamic: true,
            frozen: false,
        }
    }

    /// Suspend integration without losing the dynamic flag.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Resume integration.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
    }

    /// True when the movement driver should integrate this body.
    pub fn is_simulated(&self) -> bool {
        self.dynamic && !self.frozen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_body_is_not_simulated() {
        let rb = RigidBody::new_static();
        assert!(!rb.dynamic);
        assert!(!rb.is_simulated());
    }

    #[test]
    fn test_dynamic_body_is_simulated() {
        let rb = RigidBody::new_dynamic(0.5);
        assert!(rb.dynamic);
        assert!(rb.is_simulated());
        assert_eq!(rb.linear_damping, 0.5);
        assert_eq!(rb.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_freeze_suspends_simulation() {
        let mut rb = RigidBody::new_dynamic(0.5);
        rb.freeze();
        assert!(rb.frozen);
        assert!(!rb.is_simulated());
        rb.unfreeze();
        assert!(rb.is_simulated());
    }
}
