//! Idle spin system.
//!
//! Rotates every entity with a [`Spin`] component, one half-turn per
//! `half_turn_secs`, forever. The phase lives in the component, so
//! replacing the component restarts the rotation from zero.

use bevy_ecs::prelude::*;

use crate::components::rotation::Rotation;
use crate::components::spin::Spin;
use crate::resources::worldtime::WorldTime;

/// Advance spinning tiles by one tick.
pub fn spin_system(time: Res<WorldTime>, mut query: Query<(&mut Rotation, &mut Spin)>) {
    let dt = time.delta.max(0.0);
    for (mut rotation, mut spin) in query.iter_mut() {
        spin.elapsed += dt;
        let half_turns = spin.elapsed / spin.half_turn_secs;
        rotation.degrees = (half_turns * 180.0).rem_euclid(360.0);
    }
}
