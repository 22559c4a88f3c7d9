//! Static potential field over the arena
//!
//! A row-major grid with one cell per arena unit. Generated once at startup
//! and only ever read afterwards.

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Scalar potential grid, `height` rows of `width` cells
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialField {
    width: u32,
    height: u32,
    cells: Vec<f32>,
}

impl Default for PotentialField {
    fn default() -> Self {
        Self::generate(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

impl PotentialField {
    /// Linear potential falling from 0 at the left wall toward -1 at the right.
    ///
    /// `grid[y][x] = -(x / width)`, independent of y.
    pub fn generate(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |x, _| -(x as f32 / width as f32))
    }

    /// All-zero field (no force anywhere)
    pub fn flat(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| 0.0)
    }

    /// Build a field from a function of cell coordinates `(x, y)`
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> f32) -> Self {
        assert!(
            width > 0 && height > 0,
            "potential field must have positive size, got {width}x{height}"
        );
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Exact lookup at the truncated coordinate.
    ///
    /// Panics if the truncated coordinate is outside the grid; callers clamp
    /// first (see [`PotentialField::clamp_index`]).
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let (ix, iy) = (x.trunc(), y.trunc());
        assert!(
            ix >= 0.0 && ix < self.width as f32 && iy >= 0.0 && iy < self.height as f32,
            "field sample ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[iy as usize * self.width as usize + ix as usize]
    }

    /// Truncate and clamp a position to a valid cell
    #[inline]
    pub fn clamp_index(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(0.0, (self.width - 1) as f32).trunc(),
            y.clamp(0.0, (self.height - 1) as f32).trunc(),
        )
    }

    fn sample_clamped(&self, x: f32, y: f32) -> f32 {
        let (x, y) = self.clamp_index(x, y);
        self.sample(x, y)
    }

    /// Force from the potential difference across a body of radius `reach`.
    ///
    /// Samples one radius left/right and up/down of `pos`; the force points
    /// from higher toward lower potential.
    pub fn gradient_force(&self, pos: Vec2, reach: f32) -> Vec2 {
        let fx =
            self.sample_clamped(pos.x - reach, pos.y) - self.sample_clamped(pos.x + reach, pos.y);
        let fy =
            self.sample_clamped(pos.x, pos.y - reach) - self.sample_clamped(pos.x, pos.y + reach);
        Vec2::new(fx, fy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_generate_linear_in_x() {
        let field = PotentialField::generate(400, 300);
        assert_eq!(field.sample(0.0, 0.0), 0.0);
        assert_eq!(field.sample(200.0, 17.0), -0.5);
        assert_eq!(field.sample(200.9, 299.5), -0.5);
        assert_eq!(field.sample(399.0, 150.0), -(399.0 / 400.0));
    }

    #[test]
    fn test_gradient_pushes_toward_lower_potential() {
        let field = PotentialField::generate(400, 300);
        let force = field.gradient_force(Vec2::new(200.0, 150.0), 15.0);
        assert!((force.x - 30.0 / 400.0).abs() < 1e-6);
        assert_eq!(force.y, 0.0);
    }

    #[test]
    fn test_gradient_clamps_at_walls() {
        let field = PotentialField::generate(400, 300);
        // Body flush against the right/bottom walls samples at x + r == width
        let force = field.gradient_force(Vec2::new(385.0, 285.0), 15.0);
        assert!(force.x > 0.0);
        assert!(force.is_finite());

        let force = field.gradient_force(Vec2::new(15.0, 15.0), 15.0);
        assert!(force.x > 0.0);
    }

    #[test]
    fn test_clamp_index_truncates_into_grid() {
        let field = PotentialField::generate(400, 300);
        assert_eq!(field.clamp_index(12.7, 40.2), (12.0, 40.0));
        assert_eq!(field.clamp_index(-3.5, 299.9), (0.0, 299.0));
        assert_eq!(field.clamp_index(415.0, 300.0), (399.0, 299.0));
    }

    #[test]
    fn test_flat_field_has_no_force() {
        let field = PotentialField::flat(400, 300);
        assert_eq!(field.gradient_force(Vec2::new(50.0, 150.0), 15.0), Vec2::ZERO);
    }

    #[test]
    #[should_panic(expected = "outside 400x300 grid")]
    fn test_sample_out_of_range_panics() {
        let field = PotentialField::generate(400, 300);
        field.sample(400.0, 10.0);
    }

    proptest! {
        #[test]
        fn sample_is_pure(x in 0.0f32..400.0, y in 0.0f32..300.0) {
            let field = PotentialField::generate(400, 300);
            prop_assert_eq!(field.sample(x, y), field.sample(x, y));
        }

        #[test]
        fn sample_non_increasing_in_x(a in 0.0f32..400.0, b in 0.0f32..400.0, y in 0.0f32..300.0) {
            let field = PotentialField::generate(400, 300);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(field.sample(hi, y) <= field.sample(lo, y));
        }
    }
}
