//! ECS resources shared across systems.
//!
//! Submodules overview:
//! - [`gameconfig`] – INI-backed settings (level selection, input strategy)
//! - [`gamestate`] – score, player-movable flag and level phase
//! - [`gravity`] – world gravity vector consumed by the movement driver
//! - [`input`] – last known pointer/tilt samples
//! - [`levelstore`] – raw level texts by key
//! - [`teleport`] – the level's entry/exit teleport pairing
//! - [`worldtime`] – fixed-tick clock

pub mod gameconfig;
pub mod gamestate;
pub mod gravity;
pub mod input;
pub mod levelstore;
pub mod teleport;
pub mod worldtime;
