//! ECS systems composed into the per-tick schedule.
//!
//! Submodules overview:
//! - [`contact`] – overlap scan that emits contact-begin events
//! - [`gravity`] – input sample to world gravity mapping
//! - [`movement`] – gravity integration and wall separation driver
//! - [`sequence`] – scripted animation sequencer
//! - [`spin`] – looping idle rotation for vortex and teleport tiles
//! - [`time`] – fixed-tick clock update

pub mod contact;
pub mod gravity;
pub mod movement;
pub mod sequence;
pub mod spin;
pub mod time;
