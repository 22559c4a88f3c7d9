//! Simulation state and the fixed starting scene

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::{Body, GroupId};
use super::field::PotentialField;
use crate::consts::*;

/// Axis of a wall reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Contact produced during a tick (diagnostics only, never read back by the sim)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Robot merged with another robot; `anchored` when a wall decided the velocity
    Merge {
        robot: u32,
        other: u32,
        anchored: bool,
        vel: Vec2,
    },
    /// Robot bounced off a non-robot body
    Bounce { robot: u32, other: u32 },
    /// Material dragged by an overlapping body
    Drag { material: u32, other: u32 },
    /// Material center reached a wall
    WallReflect { body: u32, axis: Axis },
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Merge {
                robot,
                other,
                anchored,
                vel,
            } => {
                let how = if *anchored { "anchored" } else { "mass-weighted" };
                write!(f, "robot {robot} merged with {other} ({how}), vel {vel}")
            }
            SimEvent::Bounce { robot, other } => write!(f, "robot {robot} bounced off {other}"),
            SimEvent::Drag { material, other } => {
                write!(f, "material {material} dragged by {other}")
            }
            SimEvent::WallReflect { body, axis } => {
                write!(f, "material {body} reflected on {axis:?}")
            }
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub arena: Arena,
    /// Static field; rebuilt from defaults when deserialized
    #[serde(skip)]
    pub field: PotentialField,
    /// Bodies in update order
    pub bodies: Vec<Body>,
    /// Completed ticks
    pub time_ticks: u64,
    /// Contacts from the most recent tick
    pub events: Vec<SimEvent>,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimState {
    /// Default arena, linear field, and the standard four-body scene
    pub fn new() -> Self {
        Self::with_bodies(
            Arena::default(),
            PotentialField::generate(ARENA_WIDTH, ARENA_HEIGHT),
            default_scene(),
        )
    }

    pub fn with_bodies(arena: Arena, field: PotentialField, bodies: Vec<Body>) -> Self {
        Self {
            arena,
            field,
            bodies,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Look up a body by id
    pub fn body(&self, id: u32) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// JSON snapshot of everything except the field
    pub fn snapshot(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// The standard scene: one material particle and three independent robots.
///
/// Material comes first so it moves before the robots each tick.
pub fn default_scene() -> Vec<Body> {
    let center = Vec2::new(ARENA_WIDTH as f32 / 2.0, ARENA_HEIGHT as f32 / 2.0);
    vec![
        Body::material(0, GroupId(0), Vec2::new(300.0, 250.0), MATERIAL_RADIUS, MATERIAL_MAX_SPEED),
        Body::robot(1, GroupId(1), center, ROBOT_RADIUS),
        Body::robot(2, GroupId(2), Vec2::new(100.0, center.y), ROBOT_RADIUS),
        Body::robot(3, GroupId(3), Vec2::new(300.0, center.y), ROBOT_RADIUS),
    ]
}
