//! Contact-begin event and the contact router.
//!
//! The contact detector emits [`ContactEvent`] whenever two entities whose
//! contact masks match start overlapping. The router observer,
//! [`observe_contact_begin`], turns those raw pairs into gameplay effects:
//! it identifies which participant is the player, resolves the other
//! entity's [`TileKind`], and applies the matching effect rule. Dispatch
//! is by kind, never by level-text symbol.
//!
//! Effect rules (one contact = one rule firing):
//! - **Star**: score +1, the star runs its pickup sequence and is gone for
//!   good; a removed star can never be contacted again.
//! - **Vortex**: score -1, the player is frozen and swallowed; the
//!   sequence's terminal signal respawns a fresh player at the spawn
//!   point. The vortex idle spin restarts from phase zero on every
//!   contact.
//! - **Finish**: score +10, the player body stops simulating immediately,
//!   the finish tile runs its pickup sequence and its terminal signal ends
//!   the level.
//! - **TeleportEntry**: the player is frozen, sucked in at the entry and
//!   out at the paired exit; the terminal signal releases it.
//! - **TeleportExit**: no effect. The teleport is one-way; contact on the
//!   exit node is intentionally not wired to a reciprocal teleport.
//!
//! Contacts not involving the player are ignored, as is everything after
//! game over. A player contact against an entity with no tile kind means
//! the level invariants were violated at load time; the router panics
//! rather than guessing.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sequence::ActiveSequence;
use crate::components::spin::Spin;
use crate::components::tile::TileKind;
use crate::events::gamestate::ScoreChangedEvent;
use crate::resources::gamestate::GameplayState;
use crate::resources::teleport::TeleportPair;

/// Event fired when two entities with matching contact masks begin to
/// overlap.
///
/// The two fields are the entity IDs of the participants; no ordering is
/// guaranteed between them. Each begin is reported exactly once: the
/// detector suppresses repeats while the pair stays overlapped.
#[derive(Event, Debug, Clone, Copy)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Route a contact-begin event to its gameplay effect.
pub fn observe_contact_begin(
    trigger: On<ContactEvent>,
    mut commands: Commands,
    mut state: ResMut<GameplayState>,
    pair: Option<Res<TeleportPair>>,
    players: Query<(), With<Player>>,
    tiles: Query<(&TileKind, &MapPosition)>,
    mut bodies: Query<&mut RigidBody, With<Player>>,
) {
    let (a, b) = (trigger.event().a, trigger.event().b);
    let (player, other) = if players.contains(a) {
        (a, b)
    } else if players.contains(b) {
        (b, a)
    } else {
        // Not meaningful in this model, even if the engine reports it.
        return;
    };

    if state.is_game_over() {
        return;
    }

    let Ok((&kind, tile_pos)) = tiles.get(other) else {
        panic!("player contact against entity {other:?} with no tile kind");
    };
    let tile_pos = tile_pos.pos;
    debug!("player contact with {kind:?} at {tile_pos}");

    match kind {
        TileKind::Star => {
            let score = state.add_score(1);
            commands.trigger(ScoreChangedEvent { score });
            commands.entity(other).insert(ActiveSequence::pickup());
        }
        TileKind::Vortex => {
            // restart the idle spin from phase zero
            commands.entity(other).insert(Spin::new());

            let score = state.add_score(-1);
            commands.trigger(ScoreChangedEvent { score });
            state.begin_busy();
            if let Ok(mut body) = bodies.get_mut(player) {
                body.freeze();
            }
            commands
                .entity(player)
                .insert(ActiveSequence::vortex_swallow(tile_pos));
        }
        TileKind::Finish => {
            let score = state.add_score(10);
            commands.trigger(ScoreChangedEvent { score });
            // the body stops simulating now, not when the sequence ends
            if let Ok(mut body) = bodies.get_mut(player) {
                body.dynamic = false;
            }
            commands.entity(other).insert(ActiveSequence::goal_pickup());
        }
        TileKind::TeleportEntry => {
            let Some(pair) = pair.as_deref() else {
                panic!("teleport contact but the level has no teleport pairing");
            };
            let Ok((_, exit_pos)) = tiles.get(pair.exit) else {
                panic!("teleport exit entity {:?} is gone", pair.exit);
            };
            state.begin_busy();
            if let Ok(mut body) = bodies.get_mut(player) {
                body.freeze();
            }
            commands
                .entity(player)
                .insert(ActiveSequence::teleport(tile_pos, exit_pos.pos));
        }
        TileKind::TeleportExit => {
            // No reciprocal teleport on the exit node.
        }
        TileKind::Wall => {
            // Physical collision, handled by the movement driver.
        }
    }
}
