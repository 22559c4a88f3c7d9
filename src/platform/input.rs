//! Input sources: live keyboard state and scripted playback

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{Directions, TickInput};

/// Keyboard state fed by key events, polled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: Directions,
    quit: bool,
}

impl KeyboardState {
    /// Apply a key event by its DOM `key` name.
    ///
    /// Returns true if the key is one the simulation uses.
    pub fn handle_key(&mut self, key: &str, pressed: bool) -> bool {
        match key {
            "ArrowUp" => self.held.up = pressed,
            "ArrowDown" => self.held.down = pressed,
            "ArrowLeft" => self.held.left = pressed,
            "ArrowRight" => self.held.right = pressed,
            "Escape" => self.quit |= pressed,
            _ => return false,
        }
        true
    }

    /// Release everything (focus lost)
    pub fn release_all(&mut self) {
        self.held = Directions::NONE;
    }
}

impl InputSource for KeyboardState {
    fn poll(&mut self) -> TickInput {
        TickInput {
            directions: self.held,
            quit: self.quit,
        }
    }
}

/// Plays back fixed-length segments of held keys, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    segments: VecDeque<(u64, Directions)>,
}

impl ScriptedInput {
    pub fn new(segments: impl IntoIterator<Item = (u64, Directions)>) -> Self {
        Self {
            segments: segments.into_iter().filter(|(ticks, _)| *ticks > 0).collect(),
        }
    }

    /// Drive right into the material's row, push down, then let go.
    ///
    /// Spread over `total_ticks`, with the last quarter idle.
    pub fn demo(total_ticks: u64) -> Self {
        let quarter = total_ticks / 4;
        let right = Directions {
            right: true,
            ..Default::default()
        };
        let down_right = Directions {
            down: true,
            right: true,
            ..Default::default()
        };
        let left = Directions {
            left: true,
            ..Default::default()
        };
        Self::new([
            (quarter, right),
            (quarter, down_right),
            (quarter, left),
            (total_ticks - 3 * quarter, Directions::NONE),
        ])
    }

    /// Ticks left before quit
    pub fn remaining(&self) -> u64 {
        self.segments.iter().map(|(ticks, _)| ticks).sum()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        let Some((ticks, directions)) = self.segments.front_mut() else {
            return TickInput {
                directions: Directions::NONE,
                quit: true,
            };
        };
        let directions = *directions;
        *ticks -= 1;
        if *ticks == 0 {
            self.segments.pop_front();
        }
        TickInput {
            directions,
            quit: false,
        }
    }
}
