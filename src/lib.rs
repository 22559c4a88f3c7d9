//! Robot Arena - micro-robots pushing a material particle across a potential field
//!
//! Core modules:
//! - `sim`: Deterministic simulation (field, bodies, collisions, tick)
//! - `renderer`: Render sink abstraction and the per-frame draw pass
//! - `platform`: Input sources and frame pacing
//! - `app`: Simulation driver wiring input, core, renderer and pacing
//! - `settings`: Runtime diagnostics knobs

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Simulation;
pub use settings::Settings;

/// Simulation configuration constants
pub mod consts {
    /// Target tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Duration of one tick in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Arena dimensions (arena units, one field cell per unit)
    pub const ARENA_WIDTH: u32 = 400;
    pub const ARENA_HEIGHT: u32 = 300;

    /// Robot defaults
    pub const ROBOT_RADIUS: f32 = 15.0;
    /// Velocity change per tick for a held direction key
    pub const ROBOT_ACCEL_STEP: f32 = 1.0;
    /// Per-axis speed clamp
    pub const ROBOT_MAX_SPEED: f32 = 2.0;

    /// Material defaults
    pub const MATERIAL_RADIUS: f32 = 20.0;
    /// Speed cap (vector magnitude, not per axis)
    pub const MATERIAL_MAX_SPEED: f32 = 0.2;
    /// Drag coefficient applied against an overlapping body's velocity
    pub const MATERIAL_DRAG: f32 = 0.1;
}
