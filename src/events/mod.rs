//! Event types and observers.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`contact`] – contact-begin notifications and the contact router
//! - [`gamestate`] – score and game-over notifications for presentation
//! - [`sequence`] – completion signals fired by the animation sequencer
//!
//! See each submodule for concrete event data and semantics.
pub mod contact;
pub mod gamestate;
pub mod sequence;
