//! Score and game-over notifications.
//!
//! Gameplay handlers mutate [`GameplayState`](crate::resources::gamestate::GameplayState)
//! and then trigger these events, so the presentation layer observes
//! explicit state-change notifications instead of being coupled to the
//! mutation itself. The observers here are the headless presentation:
//! they log through `log`, and a host with a real display can observe the
//! same events.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Fired after every score mutation, carrying the new total.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScoreChangedEvent {
    pub score: i32,
}

/// Fired exactly once, when the level reaches its terminal state.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameOverEvent {
    pub score: i32,
}

/// Headless score display.
pub fn observe_score_changed(trigger: On<ScoreChangedEvent>) {
    info!("Score: {}", trigger.event().score);
}

/// Headless terminal-state presentation.
pub fn observe_game_over(trigger: On<GameOverEvent>) {
    info!("GAME OVER! Final score: {}", trigger.event().score);
}
