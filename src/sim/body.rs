//! Circular bodies and the neighbor view used during updates

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision group. Bodies sharing a group never interact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u32);

/// Body class, selects the update rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    /// Player-driven body: clamps to walls, feels the field, merges with other robots
    Robot,
    /// Passive particle: reflects off walls, speed-capped, dragged by contacts
    Material { max_speed: f32 },
}

/// A circular body in the arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Creation index, used for logging and events
    pub id: u32,
    pub group: GroupId,
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    radius: f32,
}

impl Body {
    pub fn new(id: u32, group: GroupId, kind: BodyKind, pos: Vec2, radius: f32) -> Self {
        assert!(
            radius > 0.0 && radius.is_finite(),
            "body {id} needs a positive finite radius, got {radius}"
        );
        assert!(pos.is_finite(), "body {id} spawned at non-finite position {pos}");
        if let BodyKind::Material { max_speed } = kind {
            assert!(max_speed >= 0.0, "body {id} has negative max_speed {max_speed}");
        }
        Self {
            id,
            group,
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    pub fn robot(id: u32, group: GroupId, pos: Vec2, radius: f32) -> Self {
        Self::new(id, group, BodyKind::Robot, pos, radius)
    }

    pub fn material(id: u32, group: GroupId, pos: Vec2, radius: f32, max_speed: f32) -> Self {
        Self::new(id, group, BodyKind::Material { max_speed }, pos, radius)
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Mass proxy: radius squared
    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius * self.radius
    }

    #[inline]
    pub fn is_robot(&self) -> bool {
        matches!(self.kind, BodyKind::Robot)
    }

    /// Advance position by one tick of velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Whether the two bodies belong to different collision groups
    #[inline]
    pub fn interacts_with(&self, other: &Body) -> bool {
        self.group != other.group
    }

    /// Circle overlap test (touching counts)
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        super::collision::circles_overlap(self.pos, self.radius, other.pos, other.radius)
    }

    /// Panic if position or velocity went non-finite
    pub fn assert_finite(&self) {
        assert!(
            self.pos.is_finite() && self.vel.is_finite(),
            "body {} reached non-finite state: pos={} vel={}",
            self.id,
            self.pos,
            self.vel
        );
    }
}

/// Every body except the one being updated, in collection order.
///
/// Neighbors are borrowed in place so writes land directly in the
/// collection and later bodies observe them within the same tick.
pub struct Neighbors<'a> {
    before: &'a mut [Body],
    after: &'a mut [Body],
}

impl<'a> Neighbors<'a> {
    /// Split `bodies` into the body at `index` and everything around it
    pub fn split(bodies: &'a mut [Body], index: usize) -> (&'a mut Body, Neighbors<'a>) {
        assert!(
            index < bodies.len(),
            "body index {index} out of range for {} bodies",
            bodies.len()
        );
        let (before, rest) = bodies.split_at_mut(index);
        let (current, after) = rest.split_at_mut(1);
        (&mut current[0], Neighbors { before, after })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.before.iter().chain(self.after.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.before.iter_mut().chain(self.after.iter_mut())
    }
}
