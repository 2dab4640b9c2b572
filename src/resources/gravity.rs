use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// World gravity applied to dynamic bodies each tick.
///
/// Starts at zero when a level loads and holds its last value whenever the
/// gravity controller has no input sample to work from.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct Gravity(pub Vec2);
