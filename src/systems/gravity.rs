//! Gravity controller.
//!
//! Maps the per-tick input sample to the world [`Gravity`] vector using
//! the strategy selected at startup:
//! - **Pointer**: gravity points from the player toward the last known
//!   pointer position, scaled by 1/100.
//! - **Tilt**: raw accelerometer data with the components swapped and the
//!   x axis sign-inverted to compensate for device orientation, scaled
//!   by 50.
//!
//! When no sample exists yet, gravity keeps its previous value; "hold last
//! gravity" is a policy, not an error. The controller goes inert once the
//! level is over.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::gameconfig::{GameConfig, GravitySource};
use crate::resources::gamestate::GameplayState;
use crate::resources::gravity::Gravity;
use crate::resources::input::InputState;

/// Scale applied to the pointer-to-player offset.
pub const TOUCH_FACTOR: f32 = 1.0 / 100.0;
/// Scale applied to tilt-sensor acceleration.
pub const TILT_FACTOR: f32 = 50.0;

/// Gravity derived from the last pointer position relative to the player.
pub(crate) fn pointer_gravity(pointer: Vec2, player: Vec2) -> Vec2 {
    (pointer - player) * TOUCH_FACTOR
}

/// Gravity derived from a tilt sample. X and Y are swapped because the
/// device is held rotated, and the resulting x axis is inverted.
pub(crate) fn tilt_gravity(accel: Vec2) -> Vec2 {
    Vec2::new(-accel.y * TILT_FACTOR, accel.x * TILT_FACTOR)
}

/// Write the configured strategy's gravity sample into the world.
pub fn gravity_controller(
    config: Res<GameConfig>,
    state: Res<GameplayState>,
    input: Res<InputState>,
    mut gravity: ResMut<Gravity>,
    players: Query<&MapPosition, With<Player>>,
) {
    if state.is_game_over() {
        return;
    }
    match config.gravity_source {
        GravitySource::Pointer => {
            if let (Some(pointer), Ok(position)) = (input.pointer, players.single()) {
                gravity.0 = pointer_gravity(pointer, position.pos);
            }
        }
        GravitySource::Tilt => {
            if let Some(accel) = input.tilt {
                gravity.0 = tilt_gravity(accel);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_pointer_gravity_scales_offset() {
        let g = pointer_gravity(Vec2::new(200.0, 100.0), Vec2::new(100.0, 50.0));
        assert!(approx_eq(g.x, 1.0));
        assert!(approx_eq(g.y, 0.5));
    }

    #[test]
    fn test_pointer_gravity_points_toward_pointer() {
        let g = pointer_gravity(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        assert!(g.x < 0.0);
        assert!(approx_eq(g.y, 0.0));
    }

    #[test]
    fn test_tilt_gravity_swaps_axes_and_inverts_x() {
        let g = tilt_gravity(Vec2::new(0.2, -0.4));
        assert!(approx_eq(g.x, 20.0)); // -(-0.4) * 50
        assert!(approx_eq(g.y, 10.0)); // 0.2 * 50
    }

    #[test]
    fn test_tilt_gravity_zero_sample() {
        let g = tilt_gravity(Vec2::ZERO);
        assert_eq!(g, Vec2::ZERO);
    }
}
