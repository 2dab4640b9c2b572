use bevy_ecs::prelude::Component;

/// Marker for the single ball entity steered by gravity.
///
/// Exactly one entity carries this marker while a level is running. The
/// vortex respawn sequence removes the old player and spawns a fresh one,
/// so the marker also serves as the contact router's identity check.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
