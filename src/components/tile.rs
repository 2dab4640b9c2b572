//! Tile kind tags.
//!
//! Each placed grid entity carries a [`TileKind`] naming what it does on
//! player contact. The contact router dispatches on this kind rather than
//! on the raw level-text symbol, so contact handling stays decoupled from
//! level syntax.

use bevy_ecs::prelude::Component;

use crate::components::collider::CollisionCategory;

/// Gameplay role of a placed tile.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileKind {
    /// Solid block the player bounces off.
    Wall,
    /// Hazard: penalizes score and swallows the player for a respawn.
    Vortex,
    /// Collectible: one score point, removed on pickup.
    Star,
    /// Goal: ends the level.
    Finish,
    /// Teleport node the player enters.
    TeleportEntry,
    /// Teleport node the player is expelled from. Contact on this node has
    /// no reciprocal teleport.
    TeleportExit,
}

impl TileKind {
    /// Collision category this kind belongs to. Both teleport labels share
    /// the Teleport category; the label only matters to the router.
    pub fn category(self) -> CollisionCategory {
        match self {
            TileKind::Wall => CollisionCategory::Wall,
            TileKind::Vortex => CollisionCategory::Hazard,
            TileKind::Star => CollisionCategory::Collectible,
            TileKind::Finish => CollisionCategory::Goal,
            TileKind::TeleportEntry | TileKind::TeleportExit => CollisionCategory::Teleport,
        }
    }
}
