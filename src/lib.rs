//! Tiltmaze library.
//!
//! This module exposes the game's ECS components, resources, systems and
//! events for use in integration tests and by the headless binary.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod systems;
