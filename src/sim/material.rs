//! Material update rules
//!
//! Material has no input channel. It reflects off the walls using its bare
//! center (not its radius), so it visibly sinks into a wall before turning
//! around, unlike robots which clamp at one radius.

use super::arena::Arena;
use super::body::{Body, Neighbors};
use super::collision::{cap_speed, drag_impulse};
use super::state::{Axis, SimEvent};
use crate::consts::MATERIAL_DRAG;

/// Full material update for one tick
pub fn update(
    material: &mut Body,
    neighbors: &Neighbors<'_>,
    arena: &Arena,
    max_speed: f32,
    events: &mut Vec<SimEvent>,
) {
    material.integrate();
    reflect_off_walls(material, arena, events);
    material.vel = cap_speed(material.vel, max_speed);
    resolve_collisions(material, neighbors, events);
}

/// Invert velocity on each axis where the center reached a wall
pub fn reflect_off_walls(material: &mut Body, arena: &Arena, events: &mut Vec<SimEvent>) {
    let (outside_x, outside_y) = arena.point_outside(material.pos);
    if outside_x {
        material.vel.x = -material.vel.x;
        events.push(SimEvent::WallReflect {
            body: material.id,
            axis: Axis::X,
        });
    }
    if outside_y {
        material.vel.y = -material.vel.y;
        events.push(SimEvent::WallReflect {
            body: material.id,
            axis: Axis::Y,
        });
    }
}

/// Drag against every overlapping body of another group.
///
/// Contributions stack across neighbors and are not re-capped until the
/// next tick.
pub fn resolve_collisions(
    material: &mut Body,
    neighbors: &Neighbors<'_>,
    events: &mut Vec<SimEvent>,
) {
    for other in neighbors.iter() {
        if material.interacts_with(other) && material.overlaps(other) {
            material.vel += drag_impulse(other.vel, MATERIAL_DRAG);
            events.push(SimEvent::Drag {
                material: material.id,
                other: other.id,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MATERIAL_MAX_SPEED;
    use crate::sim::body::GroupId;
    use glam::Vec2;

    fn step(bodies: &mut [Body], index: usize, max_speed: f32) -> Vec<SimEvent> {
        let arena = Arena::default();
        let mut events = Vec::new();
        let (material, neighbors) = Neighbors::split(bodies, index);
        update(material, &neighbors, &arena, max_speed, &mut events);
        events
    }

    fn material_at(x: f32, y: f32, vel: Vec2) -> Body {
        Body::material(0, GroupId(0), Vec2::new(x, y), 20.0, MATERIAL_MAX_SPEED).with_velocity(vel)
    }

    #[test]
    fn test_crossing_left_wall_inverts_dx() {
        let mut bodies = vec![material_at(0.2, 150.0, Vec2::new(-0.3, 0.0))];
        let events = step(&mut bodies, 0, 1.0);
        assert!(bodies[0].pos.x <= 0.0);
        assert_eq!(bodies[0].vel.x, 0.3);
        assert!(matches!(
            events[..],
            [SimEvent::WallReflect {
                body: 0,
                axis: Axis::X
            }]
        ));
    }

    #[test]
    fn test_reflected_velocity_is_capped() {
        let mut bodies = vec![material_at(0.2, 150.0, Vec2::new(-0.3, 0.0))];
        step(&mut bodies, 0, MATERIAL_MAX_SPEED);
        assert!((bodies[0].vel.x - MATERIAL_MAX_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_drifts_left_until_center_crosses_wall() {
        let mut bodies = vec![material_at(5.0, 150.0, Vec2::new(-0.3, 0.0))];

        // First tick caps -0.3 down to -0.2
        step(&mut bodies, 0, MATERIAL_MAX_SPEED);
        assert!((bodies[0].vel.x + MATERIAL_MAX_SPEED).abs() < 1e-6);

        let mut reflected_at = None;
        for _ in 0..40 {
            let events = step(&mut bodies, 0, MATERIAL_MAX_SPEED);
            if !events.is_empty() {
                reflected_at = Some(bodies[0].pos.x);
                break;
            }
        }
        let x = reflected_at.expect("material never reached the wall");
        assert!(x <= 0.0);
        assert!((bodies[0].vel.x - MATERIAL_MAX_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_wall_check_ignores_radius() {
        // Center 9.9 from the wall with radius 20: overlaps the wall, no bounce
        let mut bodies = vec![material_at(10.0, 150.0, Vec2::new(-0.1, 0.0))];
        let events = step(&mut bodies, 0, MATERIAL_MAX_SPEED);
        assert!(events.is_empty());
        assert!(bodies[0].vel.x < 0.0);
    }

    #[test]
    fn test_speed_cap_preserves_direction() {
        let mut bodies = vec![material_at(200.0, 150.0, Vec2::new(3.0, 4.0))];
        step(&mut bodies, 0, MATERIAL_MAX_SPEED);
        let vel = bodies[0].vel;
        assert!((vel.length() - MATERIAL_MAX_SPEED).abs() < 1e-6);
        assert!((vel.x / vel.y - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_drag_stacks_across_neighbors() {
        let mut bodies = vec![
            material_at(200.0, 150.0, Vec2::ZERO),
            Body::robot(1, GroupId(1), Vec2::new(230.0, 150.0), 15.0)
                .with_velocity(Vec2::new(-2.0, 0.0)),
            Body::robot(2, GroupId(2), Vec2::new(170.0, 150.0), 15.0)
                .with_velocity(Vec2::new(-2.0, 1.0)),
            Body::robot(3, GroupId(3), Vec2::new(300.0, 150.0), 15.0)
                .with_velocity(Vec2::new(2.0, 2.0)),
        ];
        let events = step(&mut bodies, 0, MATERIAL_MAX_SPEED);

        // Two contacts, each contributing -0.1 * neighbor velocity, past the cap
        let expected = Vec2::new(0.4, -0.1);
        assert!((bodies[0].vel - expected).length() < 1e-6);
        assert!(bodies[0].vel.length() > MATERIAL_MAX_SPEED);
        assert_eq!(events.len(), 2);
        // Drag never touches the neighbors
        assert_eq!(bodies[1].vel, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_same_group_neighbor_ignored() {
        let mut bodies = vec![
            material_at(200.0, 150.0, Vec2::ZERO),
            Body::robot(1, GroupId(0), Vec2::new(210.0, 150.0), 15.0)
                .with_velocity(Vec2::new(2.0, 0.0)),
        ];
        step(&mut bodies, 0, MATERIAL_MAX_SPEED);
        assert_eq!(bodies[0].vel, Vec2::ZERO);
    }
}
