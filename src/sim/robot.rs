//! Robot update rules
//!
//! Per tick, in order: integrate, respond to input (accelerate, wall
//! clamp, release-stop), add field force, resolve contacts. There is no
//! explicit state machine; behavior follows from velocity and wall contact.

use glam::Vec2;

use super::arena::{Arena, EdgeContact};
use super::body::{Body, BodyKind, Neighbors};
use super::collision::{bounce_velocity, merged_velocity};
use super::field::PotentialField;
use super::state::SimEvent;
use super::tick::Directions;
use crate::consts::{ROBOT_ACCEL_STEP, ROBOT_MAX_SPEED};

/// Full robot update for one tick
pub fn update(
    robot: &mut Body,
    neighbors: &mut Neighbors<'_>,
    keys: Directions,
    arena: &Arena,
    field: &PotentialField,
    events: &mut Vec<SimEvent>,
) {
    robot.integrate();
    let contact = respond_to_input(robot, keys, arena);
    apply_field(robot, field);
    resolve_collisions(robot, contact, neighbors, arena, events);
}

/// Clamp to walls, accelerate from held keys, stop on release.
///
/// Wall contacts are taken right after integration. A key pushing into a
/// touched wall zeroes its axis and does not accelerate; every other held
/// key accelerates by one step. The contacts are returned for edge
/// anchoring in the contact phase.
pub fn respond_to_input(robot: &mut Body, keys: Directions, arena: &Arena) -> EdgeContact {
    let contact = arena.edge_contact(robot.pos, robot.radius());
    robot.pos = arena.snap_to_edges(robot.pos, robot.radius(), contact);

    if (contact.left && keys.left) || (contact.right && keys.right) {
        robot.vel.x = 0.0;
    }
    if (contact.top && keys.up) || (contact.bottom && keys.down) {
        robot.vel.y = 0.0;
    }

    if keys.left && !contact.left {
        robot.vel.x = (robot.vel.x - ROBOT_ACCEL_STEP).max(-ROBOT_MAX_SPEED);
    }
    if keys.right && !contact.right {
        robot.vel.x = (robot.vel.x + ROBOT_ACCEL_STEP).min(ROBOT_MAX_SPEED);
    }
    if keys.up && !contact.top {
        robot.vel.y = (robot.vel.y - ROBOT_ACCEL_STEP).max(-ROBOT_MAX_SPEED);
    }
    if keys.down && !contact.bottom {
        robot.vel.y = (robot.vel.y + ROBOT_ACCEL_STEP).min(ROBOT_MAX_SPEED);
    }

    if !keys.any() {
        robot.vel = Vec2::ZERO;
    }

    contact
}

/// Add the potential-field force sampled one radius around the robot
pub fn apply_field(robot: &mut Body, field: &PotentialField) {
    robot.vel += field.gradient_force(robot.pos, robot.radius());
}

/// Merge with overlapping robots, bounce off anything else.
///
/// Neighbors are visited in collection order, so a robot touching several
/// others chains the merges and the last one wins.
pub fn resolve_collisions(
    robot: &mut Body,
    contact: EdgeContact,
    neighbors: &mut Neighbors<'_>,
    arena: &Arena,
    events: &mut Vec<SimEvent>,
) {
    for other in neighbors.iter_mut() {
        if !robot.interacts_with(other) || !robot.overlaps(other) {
            continue;
        }

        match other.kind {
            BodyKind::Robot => {
                let anchored = if contact.any() {
                    other.vel = robot.vel;
                    true
                } else if arena.edge_contact(other.pos, other.radius()).any() {
                    robot.vel = other.vel;
                    true
                } else {
                    let shared = merged_velocity(robot.vel, robot.mass(), other.vel, other.mass());
                    robot.vel = shared;
                    other.vel = shared;
                    false
                };
                events.push(SimEvent::Merge {
                    robot: robot.id,
                    other: other.id,
                    anchored,
                    vel: robot.vel,
                });
            }
            BodyKind::Material { .. } => {
                robot.vel = bounce_velocity(robot.vel);
                events.push(SimEvent::Bounce {
                    robot: robot.id,
                    other: other.id,
                });
            }
        }
    }
}
