//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod field;
pub mod material;
pub mod robot;
pub mod state;
pub mod tick;

pub use arena::{Arena, EdgeContact};
pub use body::{Body, BodyKind, GroupId, Neighbors};
pub use collision::{cap_speed, circles_overlap, merged_velocity};
pub use field::PotentialField;
pub use state::{Axis, SimEvent, SimState, default_scene};
pub use tick::{Directions, TickInput, tick};
