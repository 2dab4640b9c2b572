//! Gameplay state machine resource.
//!
//! [`GameplayState`] owns the score, the player-movable flag and the level
//! phase. All mutation goes through guarded methods so the transition
//! rules hold everywhere:
//!
//! - `Playing` is the initial phase.
//! - `Busy` is entered while a respawn or teleport sequence is in flight
//!   (`player_movable` is false for its duration) and left when the
//!   sequence's terminal signal fires.
//! - `GameOver` is terminal: entering it forces `player_movable` to false,
//!   and no later call mutates score, movability or phase again.
//!
//! Score and game-over *notifications* are separate events
//! ([`crate::events::gamestate`]); this resource is the authoritative
//! value they report.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Discrete phases a running level can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// An animation sequence owns the player; gameplay input is ignored.
    Busy,
    /// Terminal. No transitions out.
    GameOver,
}

/// Authoritative score and phase for the current level.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct GameplayState {
    score: i32,
    player_movable: bool,
    phase: GamePhase,
}

impl Default for GameplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameplayState {
    pub fn new() -> Self {
        Self {
            score: 0,
            player_movable: true,
            phase: GamePhase::Playing,
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player_movable(&self) -> bool {
        self.player_movable
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Apply a score delta and return the new score. Ignored once the level
    /// is over.
    pub fn add_score(&mut self, delta: i32) -> i32 {
        if !self.is_game_over() {
            self.score += delta;
        }
        self.score
    }

    /// Set whether the player responds to gravity. Once the level is over
    /// the flag is pinned to false.
    pub fn set_player_movable(&mut self, movable: bool) {
        if !self.is_game_over() {
            self.player_movable = movable;
        }
    }

    /// Enter the `Busy` phase for an in-flight sequence. The player is not
    /// movable while busy.
    pub fn begin_busy(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Busy;
            self.player_movable = false;
        }
    }

    /// Leave `Busy` when a sequence's terminal signal fires. Does nothing
    /// if the same tick's effects already ended the level.
    pub fn end_busy(&mut self) {
        if self.phase == GamePhase::Busy {
            self.phase = GamePhase::Playing;
        }
    }

    /// Enter the terminal phase. Irreversible; also pins the player.
    pub fn set_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.player_movable = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SCORE TESTS ====================

    #[test]
    fn test_new_state() {
        let state = GameplayState::new();
        assert_eq!(state.score(), 0);
        assert!(state.player_movable());
        assert_eq!(state.phase(), GamePhase::Playing);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_score_can_go_negative() {
        let mut state = GameplayState::new();
        assert_eq!(state.add_score(-1), -1);
        assert_eq!(state.add_score(-1), -2);
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut state = GameplayState::new();
        state.add_score(10);
        state.set_game_over();
        assert_eq!(state.add_score(1), 10);
        assert_eq!(state.score(), 10);
    }

    // ==================== PHASE TRANSITION TESTS ====================

    #[test]
    fn test_busy_round_trip() {
        let mut state = GameplayState::new();
        state.begin_busy();
        assert_eq!(state.phase(), GamePhase::Busy);
        assert!(!state.player_movable());
        state.end_busy();
        assert_eq!(state.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameplayState::new();
        state.set_game_over();
        assert!(state.is_game_over());
        assert!(!state.player_movable());

        state.end_busy();
        state.begin_busy();
        state.set_player_movable(true);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert!(!state.player_movable());
    }

    #[test]
    fn test_game_over_during_busy_wins_over_end_busy() {
        let mut state = GameplayState::new();
        state.begin_busy();
        state.set_game_over();
        state.end_busy();
        assert_eq!(state.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_movable_toggles_while_playing() {
        let mut state = GameplayState::new();
        state.set_player_movable(false);
        assert!(!state.player_movable());
        state.set_player_movable(true);
        assert!(state.player_movable());
    }
}
