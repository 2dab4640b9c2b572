use bevy_ecs::prelude::{Entity, Resource};

/// The level's teleport pairing, inserted during setup when the grid
/// contains teleport nodes.
///
/// Level validation guarantees a level has either no teleport nodes or
/// exactly one entry and one exit, so a player contact against a teleport
/// node while this resource is absent means the load-time invariant was
/// violated and the router fails fast.
#[derive(Resource, Clone, Copy, Debug)]
pub struct TeleportPair {
    pub entry: Entity,
    pub exit: Entity,
}
