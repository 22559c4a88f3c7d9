//! Rendering module
//!
//! The simulation never draws directly. Each frame it clears a
//! [`RenderSink`] and hands it one filled circle per body.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod color;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSink;
pub use color::{Color, body_color, colors};
pub use recording::{DrawCommand, RecordingSink};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Body, SimState};

/// A filled circle in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCircle {
    /// Truncated body center
    pub center: IVec2,
    pub radius: f32,
    pub color: Color,
}

impl DrawCircle {
    pub fn for_body(body: &Body) -> Self {
        Self {
            center: IVec2::new(body.pos.x as i32, body.pos.y as i32),
            radius: body.radius(),
            color: body_color(&body.kind),
        }
    }
}

/// Destination for draw calls (canvas, log, test recorder)
pub trait RenderSink {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);

    fn draw_circle(&mut self, circle: DrawCircle);

    /// Frame finished
    fn present(&mut self) {}
}

/// Draw one frame: background, then every body in collection order
pub fn render<S: RenderSink + ?Sized>(state: &SimState, sink: &mut S) {
    sink.clear(colors::BACKGROUND);
    for body in &state.bodies {
        sink.draw_circle(DrawCircle::for_body(body));
    }
    sink.present();
}
