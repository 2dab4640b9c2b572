//! Kinematic movement driver.
//!
//! Stand-in for the host physics engine at the interface the gameplay
//! core expects: it integrates the world [`Gravity`] into dynamic bodies
//! with linear damping, steps positions, and separates the player from
//! walls its collision mask matches. No gameplay module depends on what
//! happens in here; the core only configures bodies and consumes the
//! contact events the detector produces afterwards.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::collider::{Collider, ColliderShape};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::tile::TileKind;
use crate::resources::gravity::Gravity;
use crate::resources::worldtime::WorldTime;

/// Integrate gravity and damping into dynamic, unfrozen bodies.
pub fn movement_system(
    time: Res<WorldTime>,
    gravity: Res<Gravity>,
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
) {
    let dt = time.delta.max(0.0);
    for (mut position, mut body) in query.iter_mut() {
        if !body.is_simulated() {
            continue;
        }
        let accel = gravity.0;
        body.velocity += accel * dt;
        let damping = (1.0 - body.linear_damping * dt).max(0.0);
        body.velocity *= damping;
        let delta = body.velocity * dt;
        position.pos += delta;
    }
}

/// Push the player's circle out of any wall box it penetrates and cancel
/// the velocity component pointing into the wall.
pub fn resolve_wall_collisions(
    mut movers: Query<(&mut MapPosition, &mut RigidBody, &Collider), With<Player>>,
    walls: Query<(&MapPosition, &Collider), (With<TileKind>, Without<Player>)>,
) {
    for (mut position, mut body, collider) in movers.iter_mut() {
        if !body.is_simulated() {
            continue;
        }
        let ColliderShape::Circle { radius } = collider.shape else {
            continue;
        };
        for (wall_position, wall_collider) in walls.iter() {
            if !collider.wants_collision(wall_collider) {
                continue;
            }
            let ColliderShape::Box { half_extents } = wall_collider.shape else {
                continue;
            };
            if let Some(normal) = separate_circle_from_box(
                &mut position.pos,
                radius,
                wall_position.pos,
                half_extents,
            ) {
                let inward = body.velocity.dot(normal);
                if inward < 0.0 {
                    let correction = normal * inward;
                    body.velocity -= correction;
                }
            }
        }
    }
}

/// Move `center` out of the box if the circle penetrates it. Returns the
/// push normal when a separation happened.
fn separate_circle_from_box(
    center: &mut Vec2,
    radius: f32,
    box_pos: Vec2,
    half_extents: Vec2,
) -> Option<Vec2> {
    let delta = *center - box_pos;
    let clamped = delta.clamp(-half_extents, half_extents);
    let closest = box_pos + clamped;
    let to_center = *center - closest;
    let dist_sq = to_center.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    if dist_sq > f32::EPSILON {
        // center outside the box: push along the face/corner normal
        let dist = dist_sq.sqrt();
        let normal = to_center / dist;
        *center += normal * (radius - dist);
        Some(normal)
    } else {
        // center inside the box: push out along the shallowest axis
        let pen_x = half_extents.x + radius - delta.x.abs();
        let pen_y = half_extents.y + radius - delta.y.abs();
        let normal = if pen_x < pen_y {
            Vec2::new(delta.x.signum(), 0.0)
        } else {
            Vec2::new(0.0, delta.y.signum())
        };
        *center += normal * pen_x.min(pen_y);
        Some(normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    // ==================== SEPARATION TESTS ====================

    #[test]
    fn test_no_separation_when_clear() {
        let mut center = Vec2::new(100.0, 0.0);
        let moved = separate_circle_from_box(
            &mut center,
            32.0,
            Vec2::new(0.0, 0.0),
            Vec2::new(32.0, 32.0),
        );
        assert!(moved.is_none());
        assert_eq!(center, Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_face_separation_pushes_out() {
        // circle center 60 units right of a 64x64 box: 4 units deep
        let mut center = Vec2::new(60.0, 0.0);
        let normal = separate_circle_from_box(
            &mut center,
            32.0,
            Vec2::new(0.0, 0.0),
            Vec2::new(32.0, 32.0),
        )
        .unwrap();
        assert!(approx_eq(normal.x, 1.0));
        assert!(approx_eq(center.x, 64.0));
        assert!(approx_eq(center.y, 0.0));
    }

    #[test]
    fn test_center_inside_box_picks_shallow_axis() {
        let mut center = Vec2::new(30.0, 5.0);
        let normal = separate_circle_from_box(
            &mut center,
            32.0,
            Vec2::new(0.0, 0.0),
            Vec2::new(32.0, 32.0),
        )
        .unwrap();
        // shallower penetration is along +x
        assert!(approx_eq(normal.x, 1.0));
        assert!(approx_eq(center.x, 64.0));
    }
}
