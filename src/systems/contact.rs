//! Contact detection.
//!
//! Scans collider pairs whose contact masks match and triggers a
//! [`ContactEvent`] the tick a pair *begins* to overlap. Pairs that stay
//! overlapped are tracked in [`ContactTracker`] and not re-reported; once
//! they separate (or one side despawns) the pair is forgotten and a later
//! overlap counts as a new begin.
//!
//! Events are triggered in the order the scan finds them; no further
//! ordering is guaranteed between simultaneous contacts, only that each
//! begin is dispatched exactly once.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;

use crate::components::collider::Collider;
use crate::components::mapposition::MapPosition;
use crate::events::contact::ContactEvent;

/// Overlapping contact-mask pairs from the previous tick.
#[derive(Resource, Debug, Default)]
pub struct ContactTracker {
    overlapping: FxHashSet<(Entity, Entity)>,
}

/// Detect new overlaps and trigger contact-begin events.
pub fn contact_detector(
    mut commands: Commands,
    mut tracker: ResMut<ContactTracker>,
    query: Query<(Entity, &MapPosition, &Collider)>,
) {
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();
    let mut begins: Vec<ContactEvent> = Vec::new();

    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if !collider_a.wants_contact(collider_b) {
            continue;
        }
        if !collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            continue;
        }
        let key = if entity_a < entity_b {
            (entity_a, entity_b)
        } else {
            (entity_b, entity_a)
        };
        current.insert(key);
        if !tracker.overlapping.contains(&key) {
            begins.push(ContactEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }

    tracker.overlapping = current;
    for event in begins {
        commands.trigger(event);
    }
}
