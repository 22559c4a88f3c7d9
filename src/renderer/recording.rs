//! Render sink that records draw calls instead of drawing
//!
//! Used by the native headless run (frames are logged at trace level) and
//! by tests.

use serde::{Deserialize, Serialize};

use super::{Color, DrawCircle, RenderSink};

/// A single recorded draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    Circle(DrawCircle),
}

/// Keeps the commands of the frame in progress and of the last presented frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    current: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Color) {
        self.current.clear();
        self.current.push(DrawCommand::Clear(color));
    }

    fn draw_circle(&mut self, circle: DrawCircle) {
        self.current.push(DrawCommand::Circle(circle));
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.current);
        self.frames_presented += 1;

        if log::log_enabled!(log::Level::Trace) {
            for command in &self.last_frame {
                if let DrawCommand::Circle(c) = command {
                    log::trace!(
                        "frame {}: circle at ({}, {}) r={} {}",
                        self.frames_presented,
                        c.center.x,
                        c.center.y,
                        c.radius,
                        c.color.css()
                    );
                }
            }
        }
    }
}
