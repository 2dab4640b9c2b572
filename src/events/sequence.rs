//! Sequence completion signals.
//!
//! When a step containing [`StepAction::Signal`](crate::components::sequence::StepAction)
//! completes, the sequencer triggers a [`SequenceSignalEvent`] carrying
//! the entity and the signal name. The observer here is the state
//! machine's re-entry point: it finishes the respawn, game-over and
//! teleport flows that the contact router started.
//!
//! An unknown signal is a programming error and panics.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sequence::{
    SIGNAL_FINISH_LEVEL, SIGNAL_RESPAWN_PLAYER, SIGNAL_TELEPORT_DONE,
};
use crate::events::gamestate::GameOverEvent;
use crate::game::spawn_player;
use crate::resources::gamestate::GameplayState;
use crate::resources::gravity::Gravity;
use crate::resources::input::InputState;

/// Event emitted when a sequence step carrying a signal completes.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct SequenceSignalEvent {
    /// The entity whose sequence fired the signal.
    pub entity: Entity,
    /// The signal name configured on the step.
    pub signal: String,
}

/// Apply the gameplay effect of a completed sequence.
pub fn observe_sequence_signal(
    trigger: On<SequenceSignalEvent>,
    mut commands: Commands,
    mut state: ResMut<GameplayState>,
    mut gravity: ResMut<Gravity>,
    mut input: ResMut<InputState>,
    mut players: Query<(Entity, &mut RigidBody), With<Player>>,
) {
    let signal = trigger.event().signal.as_str();
    debug!("sequence signal '{signal}' from {:?}", trigger.event().entity);
    match signal {
        SIGNAL_RESPAWN_PLAYER => {
            // The swallow sequence removed the old player entity; put a
            // fresh one at the spawn point with a calm world.
            spawn_player(&mut commands);
            gravity.0 = Vec2::ZERO;
            state.end_busy();
            state.set_player_movable(true);
            input.clear_pointer();
        }
        SIGNAL_FINISH_LEVEL => {
            for (player, _) in players.iter() {
                commands.entity(player).despawn();
            }
            state.set_game_over();
            commands.trigger(GameOverEvent {
                score: state.score(),
            });
        }
        SIGNAL_TELEPORT_DONE => {
            for (_, mut body) in players.iter_mut() {
                body.unfreeze();
            }
            state.end_busy();
            state.set_player_movable(true);
            input.clear_pointer();
        }
        other => panic!("unknown sequence signal '{other}'"),
    }
}
