//! Level setup and entity placement.
//!
//! [`setup`] compiles a validated level text into the world: every
//! non-blank grid symbol becomes one entity at its tile position, the
//! player is added afterwards at the fixed spawn point, world gravity is
//! zeroed, and the teleport pairing (if any) is recorded as a resource.
//!
//! Collision configuration always comes from the static policy in
//! [`crate::components::collider`]; nothing in here hand-rolls masks.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::collider::{Collider, CollisionCategory};
use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::spin::Spin;
use crate::components::tile::TileKind;
use crate::level::LevelGrid;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gravity::Gravity;
use crate::resources::levelstore::LevelStore;
use crate::resources::teleport::TeleportPair;

/// Grid cell edge length in world units.
pub const TILE_SIZE: f32 = 64.0;
/// Radius of round tiles (vortex, teleports) and the player ball.
pub const TILE_RADIUS: f32 = 32.0;
/// Fixed player spawn point.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(96.0, 672.0);
/// Linear damping of the player body.
pub const PLAYER_LINEAR_DAMPING: f32 = 0.5;

/// World position of a tile, centered within its 64-unit cell.
pub fn tile_position(row: usize, column: usize) -> Vec2 {
    Vec2::new(
        TILE_SIZE * column as f32 + TILE_SIZE * 0.5,
        TILE_SIZE * row as f32 + TILE_SIZE * 0.5,
    )
}

/// Place one grid symbol. Returns `None` for blank cells; panics on an
/// unknown symbol, which indicates corrupt level data.
pub fn place_tile(
    commands: &mut Commands,
    symbol: char,
    row: usize,
    column: usize,
) -> Option<Entity> {
    let kind = match symbol {
        'x' => TileKind::Wall,
        'v' => TileKind::Vortex,
        's' => TileKind::Star,
        'f' => TileKind::Finish,
        '1' => TileKind::TeleportEntry,
        '2' => TileKind::TeleportExit,
        ' ' => return None,
        other => panic!("unknown symbol '{other}' in level data"),
    };

    let collider = match kind {
        TileKind::Wall | TileKind::Star | TileKind::Finish => {
            Collider::rect(kind.category(), TILE_SIZE, TILE_SIZE)
        }
        TileKind::Vortex | TileKind::TeleportEntry | TileKind::TeleportExit => {
            Collider::circle(kind.category(), TILE_RADIUS)
        }
    };

    let position = tile_position(row, column);
    let mut entity = commands.spawn((
        kind,
        MapPosition::new(position.x, position.y),
        Rotation::default(),
        Scale::default(),
        Opacity::default(),
        RigidBody::new_static(),
        collider,
    ));
    if matches!(
        kind,
        TileKind::Vortex | TileKind::TeleportEntry | TileKind::TeleportExit
    ) {
        entity.insert(Spin::new());
    }
    Some(entity.id())
}

/// Spawn the player ball at the fixed spawn point: dynamic, non-rotating,
/// damped, colliding with walls and reporting contact with special tiles.
pub fn spawn_player(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Player,
            MapPosition::new(PLAYER_SPAWN.x, PLAYER_SPAWN.y),
            Scale::default(),
            Opacity::default(),
            RigidBody::new_dynamic(PLAYER_LINEAR_DAMPING),
            Collider::circle(CollisionCategory::Player, TILE_RADIUS),
        ))
        .id()
}

/// Compile the configured level into entities.
///
/// Level data is a build-time asset: a missing key, an unknown symbol or a
/// broken teleport pairing aborts startup with a diagnostic.
pub fn setup(mut commands: Commands, store: Res<LevelStore>, config: Res<GameConfig>) {
    let text = store
        .get(&config.level_name)
        .unwrap_or_else(|| panic!("level '{}' not found in the level store", config.level_name));
    let grid = LevelGrid::parse(text);
    if let Err(e) = grid.validate() {
        panic!("invalid level '{}': {e}", config.level_name);
    }

    let mut placed = 0usize;
    let mut entry = None;
    let mut exit = None;
    for (row, column, symbol) in grid.cells() {
        if let Some(entity) = place_tile(&mut commands, symbol, row, column) {
            placed += 1;
            match symbol {
                '1' => entry = Some(entity),
                '2' => exit = Some(entity),
                _ => {}
            }
        }
    }

    spawn_player(&mut commands);
    commands.insert_resource(Gravity(Vec2::ZERO));
    if let (Some(entry), Some(exit)) = (entry, exit) {
        commands.insert_resource(TeleportPair { entry, exit });
    }

    info!(
        "level '{}' loaded: {} rows, {placed} tiles",
        config.level_name,
        grid.rows().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_position_centers_in_cell() {
        assert_eq!(tile_position(0, 0), Vec2::new(32.0, 32.0));
        assert_eq!(tile_position(0, 2), Vec2::new(160.0, 32.0));
        assert_eq!(tile_position(2, 0), Vec2::new(32.0, 160.0));
        assert_eq!(tile_position(2, 2), Vec2::new(160.0, 160.0));
    }

    #[test]
    fn test_tile_position_scales_with_grid() {
        assert_eq!(tile_position(10, 1), Vec2::new(96.0, 672.0));
    }
}
