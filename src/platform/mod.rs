//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input (keyboard state, scripted playback)
//! - Frame pacing (sleep limiter natively, requestAnimationFrame in the browser)

pub mod input;
pub mod limiter;

pub use input::{KeyboardState, ScriptedInput};
#[cfg(not(target_arch = "wasm32"))]
pub use limiter::SleepLimiter;
pub use limiter::ExternalPacing;

use std::cell::RefCell;
use std::rc::Rc;

use crate::sim::TickInput;

/// Source of per-tick input snapshots
pub trait InputSource {
    /// Snapshot for the coming tick
    fn poll(&mut self) -> TickInput;
}

/// Input shared with event callbacks (browser key listeners)
impl<T: InputSource> InputSource for Rc<RefCell<T>> {
    fn poll(&mut self) -> TickInput {
        self.borrow_mut().poll()
    }
}

/// Paces the frame loop to a target tick rate
pub trait FrameLimiter {
    /// Block until the next frame is due
    fn wait_for_next_frame(&mut self);
}
