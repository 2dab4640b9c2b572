//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`collider`] – collider shapes and the static collision policy bitmasks
//! - [`mapposition`] – world-space position for an entity
//! - [`opacity`] – alpha channel for render modulation
//! - [`player`] – marker for the single gravity-driven ball
//! - [`rigidbody`] – velocity, damping and mobility flags
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – uniform scale factor
//! - [`sequence`] – scripted animation sequences and their steps
//! - [`spin`] – looping idle rotation for vortex and teleport tiles
//! - [`tile`] – gameplay role tags for placed tiles

pub mod collider;
pub mod mapposition;
pub mod opacity;
pub mod player;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sequence;
pub mod spin;
pub mod tile;
