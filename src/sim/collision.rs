//! Circle contact tests and contact response helpers
//!
//! Robots merge with robots (inelastic, mass = radius²), bounce off
//! everything else. Material only feels a weak drag from its contacts.

use glam::Vec2;

/// Check whether two circles overlap or touch
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}

/// Shared velocity after a perfectly inelastic merge
///
/// `(v1 * m1 + v2 * m2) / (m1 + m2)`
pub fn merged_velocity(v1: Vec2, m1: f32, v2: Vec2, m2: f32) -> Vec2 {
    let total_mass = m1 + m2;
    assert!(
        total_mass > 0.0,
        "merge needs positive total mass, got {m1} + {m2}"
    );
    (v1 * m1 + v2 * m2) / total_mass
}

/// Elastic bounce-back: both axes inverted, mass ignored
#[inline]
pub fn bounce_velocity(velocity: Vec2) -> Vec2 {
    -velocity
}

/// Velocity change on a body dragged by an overlapping neighbor
#[inline]
pub fn drag_impulse(neighbor_vel: Vec2, coefficient: f32) -> Vec2 {
    -coefficient * neighbor_vel
}

/// Rescale `velocity` so its magnitude does not exceed `max_speed`.
///
/// Direction is preserved.
pub fn cap_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}
