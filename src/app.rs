//! Simulation driver
//!
//! One frame: poll input, tick the core, log diagnostics, render, pace.

use crate::platform::{FrameLimiter, InputSource};
use crate::renderer::{RenderSink, render};
use crate::settings::Settings;
use crate::sim::{SimState, tick};

/// Owns the simulation state and its external collaborators
pub struct Simulation<I, R, L> {
    state: SimState,
    input: I,
    sink: R,
    limiter: L,
    settings: Settings,
}

impl<I: InputSource, R: RenderSink, L: FrameLimiter> Simulation<I, R, L> {
    pub fn new(state: SimState, input: I, sink: R, limiter: L, settings: Settings) -> Self {
        log::info!(
            "Simulation ready: {} bodies in {}x{} arena",
            state.bodies.len(),
            state.arena.width,
            state.arena.height
        );
        Self {
            state,
            input,
            sink,
            limiter,
            settings,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Run one frame. Returns false once quit has been requested; that frame
    /// neither ticks nor draws.
    pub fn step(&mut self) -> bool {
        let input = self.input.poll();
        if input.quit {
            log::info!("Quit requested after {} ticks", self.state.time_ticks);
            return false;
        }

        tick(&mut self.state, &input);
        self.log_tick();

        render(&self.state, &mut self.sink);
        self.limiter.wait_for_next_frame();
        true
    }

    /// Step until quit; returns the number of completed ticks
    pub fn run(&mut self) -> u64 {
        while self.step() {}
        self.state.time_ticks
    }

    fn log_tick(&self) {
        if self.settings.log_contacts {
            for event in &self.state.events {
                log::debug!("tick {}: {}", self.state.time_ticks, event);
            }
        }
        if self.settings.trace_bodies {
            for body in &self.state.bodies {
                log::trace!(
                    "tick {}: body {} pos={} vel={}",
                    self.state.time_ticks,
                    body.id,
                    body.pos,
                    body.vel
                );
            }
        }
    }
}
