//! Collider component and the static collision policy.
//!
//! Every placed entity gets a [`Collider`] describing its shape and three
//! bitmasks: what it *is* (category), what it physically collides with
//! (collision mask) and what it reports contact-begin events against
//! (contact mask). The masks come from [`CollisionCategory`], a closed
//! enumeration that is the single source of truth for both the entity
//! factory and the contact detector.
//!
//! The policy, immutable at runtime:
//!
//! | kind        | bit | collides with | reports contact with                  |
//! |-------------|-----|---------------|---------------------------------------|
//! | Player      |   1 | Wall          | Collectible, Hazard, Goal, Teleport   |
//! | Wall        |   2 | Player        | none                                  |
//! | Collectible |   4 | none          | Player                                |
//! | Hazard      |   8 | none          | Player                                |
//! | Goal        |  16 | none          | Player                                |
//! | Teleport    |  32 | none          | Player                                |

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Closed set of collision categories, one power-of-two bit each.
///
/// The bit values are compared across the whole lifetime of a level and
/// must never be renumbered once entities exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum CollisionCategory {
    Player = 1,
    Wall = 2,
    Collectible = 4,
    Hazard = 8,
    Goal = 16,
    Teleport = 32,
}

impl CollisionCategory {
    /// The category bit of this kind.
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Categories this kind physically collides with.
    pub fn collision_mask(self) -> u32 {
        match self {
            CollisionCategory::Player => CollisionCategory::Wall.bit(),
            CollisionCategory::Wall => CollisionCategory::Player.bit(),
            CollisionCategory::Collectible
            | CollisionCategory::Hazard
            | CollisionCategory::Goal
            | CollisionCategory::Teleport => 0,
        }
    }

    /// Categories this kind reports contact-begin events against.
    pub fn contact_mask(self) -> u32 {
        match self {
            CollisionCategory::Player => {
                CollisionCategory::Collectible.bit()
                    | CollisionCategory::Hazard.bit()
                    | CollisionCategory::Goal.bit()
                    | CollisionCategory::Teleport.bit()
            }
            CollisionCategory::Wall => 0,
            CollisionCategory::Collectible
            | CollisionCategory::Hazard
            | CollisionCategory::Goal
            | CollisionCategory::Teleport => CollisionCategory::Player.bit(),
        }
    }
}

/// Collider geometry, centered on the entity's `MapPosition`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderShape {
    Circle { radius: f32 },
    Box { half_extents: Vec2 },
}

/// Shape plus the three policy bitmasks, configured once at placement.
#[derive(Component, Clone, Copy, Debug)]
pub struct Collider {
    pub shape: ColliderShape,
    pub category: u32,
    pub collision_mask: u32,
    pub contact_mask: u32,
}

impl Collider {
    /// Build a collider with the masks the policy table assigns to `category`.
    pub fn from_policy(category: CollisionCategory, shape: ColliderShape) -> Self {
        Self {
            shape,
            category: category.bit(),
            collision_mask: category.collision_mask(),
            contact_mask: category.contact_mask(),
        }
    }

    pub fn circle(category: CollisionCategory, radius: f32) -> Self {
        Self::from_policy(category, ColliderShape::Circle { radius })
    }

    pub fn rect(category: CollisionCategory, width: f32, height: f32) -> Self {
        Self::from_policy(
            category,
            ColliderShape::Box {
                half_extents: Vec2::new(width * 0.5, height * 0.5),
            },
        )
    }

    /// True if either collider reports contact against the other's category.
    pub fn wants_contact(&self, other: &Self) -> bool {
        self.contact_mask & other.category != 0 || other.contact_mask & self.category != 0
    }

    /// True if either collider physically collides with the other's category.
    pub fn wants_collision(&self, other: &Self) -> bool {
        self.collision_mask & other.category != 0 || other.collision_mask & self.category != 0
    }

    /// Geometric overlap test against another collider at a different position.
    pub fn overlaps(&self, pos: Vec2, other: &Self, other_pos: Vec2) -> bool {
        match (self.shape, other.shape) {
            (ColliderShape::Circle { radius: ra }, ColliderShape::Circle { radius: rb }) => {
                let r = ra + rb;
                pos.distance_squared(other_pos) < r * r
            }
            (ColliderShape::Circle { radius }, ColliderShape::Box { half_extents }) => {
                circle_box_overlap(pos, radius, other_pos, half_extents)
            }
            (ColliderShape::Box { half_extents }, ColliderShape::Circle { radius }) => {
                circle_box_overlap(other_pos, radius, pos, half_extents)
            }
            (ColliderShape::Box { half_extents: ha }, ColliderShape::Box { half_extents: hb }) => {
                let d = (pos - other_pos).abs();
                d.x < ha.x + hb.x && d.y < ha.y + hb.y
            }
        }
    }
}

fn circle_box_overlap(center: Vec2, radius: f32, box_pos: Vec2, half_extents: Vec2) -> bool {
    let closest = (center - box_pos).clamp(-half_extents, half_extents) + box_pos;
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== POLICY TABLE TESTS ====================

    #[test]
    fn test_category_bits_are_distinct_powers_of_two() {
        let bits = [
            CollisionCategory::Player.bit(),
            CollisionCategory::Wall.bit(),
            CollisionCategory::Collectible.bit(),
            CollisionCategory::Hazard.bit(),
            CollisionCategory::Goal.bit(),
            CollisionCategory::Teleport.bit(),
        ];
        let mut seen = 0u32;
        for bit in bits {
            assert_eq!(bit.count_ones(), 1, "bit {bit} is not a power of two");
            assert_eq!(seen & bit, 0, "bit {bit} assigned twice");
            seen |= bit;
        }
        assert_eq!(seen, 0b111111);
    }

    #[test]
    fn test_player_collides_only_with_walls() {
        assert_eq!(
            CollisionCategory::Player.collision_mask(),
            CollisionCategory::Wall.bit()
        );
    }

    #[test]
    fn test_player_reports_contact_with_special_tiles() {
        let mask = CollisionCategory::Player.contact_mask();
        assert_ne!(mask & CollisionCategory::Collectible.bit(), 0);
        assert_ne!(mask & CollisionCategory::Hazard.bit(), 0);
        assert_ne!(mask & CollisionCategory::Goal.bit(), 0);
        assert_ne!(mask & CollisionCategory::Teleport.bit(), 0);
        assert_eq!(mask & CollisionCategory::Wall.bit(), 0);
    }

    #[test]
    fn test_special_tiles_collide_with_nothing() {
        for kind in [
            CollisionCategory::Collectible,
            CollisionCategory::Hazard,
            CollisionCategory::Goal,
            CollisionCategory::Teleport,
        ] {
            assert_eq!(kind.collision_mask(), 0, "{kind:?} should be pass-through");
            assert_eq!(kind.contact_mask(), CollisionCategory::Player.bit());
        }
    }

    #[test]
    fn test_wall_reports_no_contacts() {
        assert_eq!(CollisionCategory::Wall.contact_mask(), 0);
    }

    // ==================== MASK PAIRING TESTS ====================

    #[test]
    fn test_player_star_pair_wants_contact_not_collision() {
        let player = Collider::circle(CollisionCategory::Player, 32.0);
        let star = Collider::rect(CollisionCategory::Collectible, 64.0, 64.0);
        assert!(player.wants_contact(&star));
        assert!(!player.wants_collision(&star));
    }

    #[test]
    fn test_player_wall_pair_wants_collision_not_contact() {
        let player = Collider::circle(CollisionCategory::Player, 32.0);
        let wall = Collider::rect(CollisionCategory::Wall, 64.0, 64.0);
        assert!(player.wants_collision(&wall));
        assert!(!player.wants_contact(&wall));
    }

    #[test]
    fn test_tile_tile_pairs_are_inert() {
        let star = Collider::rect(CollisionCategory::Collectible, 64.0, 64.0);
        let vortex = Collider::circle(CollisionCategory::Hazard, 32.0);
        assert!(!star.wants_contact(&vortex));
        assert!(!star.wants_collision(&vortex));
    }

    // ==================== OVERLAP TESTS ====================

    #[test]
    fn test_circle_circle_overlap() {
        let a = Collider::circle(CollisionCategory::Player, 32.0);
        let b = Collider::circle(CollisionCategory::Hazard, 32.0);
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(60.0, 0.0)));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(64.0, 0.0)));
    }

    #[test]
    fn test_circle_box_overlap() {
        let ball = Collider::circle(CollisionCategory::Player, 32.0);
        let wall = Collider::rect(CollisionCategory::Wall, 64.0, 64.0);
        // circle touching the box face from the right
        assert!(ball.overlaps(Vec2::new(63.0, 0.0), &wall, Vec2::new(0.0, 0.0)));
        assert!(!ball.overlaps(Vec2::new(65.0, 0.0), &wall, Vec2::new(0.0, 0.0)));
        // corner case: diagonal distance exceeds radius even though axis
        // distances do not
        assert!(!ball.overlaps(Vec2::new(56.0, 56.0), &wall, Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_box_box_overlap() {
        let a = Collider::rect(CollisionCategory::Wall, 64.0, 64.0);
        let b = Collider::rect(CollisionCategory::Wall, 64.0, 64.0);
        assert!(a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(63.0, 0.0)));
        assert!(!a.overlaps(Vec2::new(0.0, 0.0), &b, Vec2::new(64.0, 0.0)));
    }
}
