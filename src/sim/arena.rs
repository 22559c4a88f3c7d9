//! Arena bounds and wall contact checks
//!
//! The arena is a fixed rectangle with the origin at the top-left corner,
//! x growing right and y growing down (screen convention).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Rectangular arena bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH as f32, ARENA_HEIGHT as f32)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width > 0.0 && height > 0.0,
            "arena must have positive size, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Radius-aware wall contacts for a circle centered at `pos`
    pub fn edge_contact(&self, pos: Vec2, radius: f32) -> EdgeContact {
        EdgeContact {
            left: pos.x <= radius,
            right: pos.x >= self.width - radius,
            top: pos.y <= radius,
            bottom: pos.y >= self.height - radius,
        }
    }

    /// Snap a circle onto every wall it touches.
    ///
    /// Left/top are applied before right/bottom, so a circle wider than the
    /// arena ends up against the right/bottom wall.
    pub fn snap_to_edges(&self, pos: Vec2, radius: f32, contact: EdgeContact) -> Vec2 {
        let mut snapped = pos;
        if contact.left {
            snapped.x = radius;
        }
        if contact.right {
            snapped.x = self.width - radius;
        }
        if contact.top {
            snapped.y = radius;
        }
        if contact.bottom {
            snapped.y = self.height - radius;
        }
        snapped
    }

    /// Axes on which a bare point sits on or past a wall (not radius-aware)
    pub fn point_outside(&self, pos: Vec2) -> (bool, bool) {
        (
            pos.x <= 0.0 || pos.x >= self.width,
            pos.y <= 0.0 || pos.y >= self.height,
        )
    }

    /// Whether a circle lies fully within the walls
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Which walls a body is touching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl EdgeContact {
    #[inline]
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}
