//! Colors for arena elements

use serde::{Deserialize, Serialize};

use crate::sim::BodyKind;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `#rrggbb` form
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors for simulation elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::rgb(255, 255, 255);
    pub const ROBOT: Color = Color::rgb(0, 0, 0);
    pub const MATERIAL: Color = Color::rgb(255, 0, 0);
}

/// Fixed color for a body class
pub fn body_color(kind: &BodyKind) -> Color {
    match kind {
        BodyKind::Robot => colors::ROBOT,
        BodyKind::Material { .. } => colors::MATERIAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css() {
        assert_eq!(colors::MATERIAL.css(), "#ff0000");
        assert_eq!(Color::rgb(1, 171, 16).css(), "#01ab10");
    }
}
