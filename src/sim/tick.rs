//! Fixed-rate simulation tick
//!
//! Advances every body once, in collection order, mutating the collection in
//! place. A body updated later in the tick sees the positions and velocities
//! that earlier bodies already wrote this tick.

use serde::{Deserialize, Serialize};

use super::body::{BodyKind, Neighbors};
use super::state::SimState;
use super::{material, robot};

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Keys held this tick (shared by every robot)
    pub directions: Directions,
    /// End the run; checked by the driver before ticking
    pub quit: bool,
}

/// Advance the simulation by one tick
pub fn tick(state: &mut SimState, input: &TickInput) {
    state.events.clear();

    for index in 0..state.bodies.len() {
        let (body, mut neighbors) = Neighbors::split(&mut state.bodies, index);
        match body.kind {
            BodyKind::Robot => robot::update(
                body,
                &mut neighbors,
                input.directions,
                &state.arena,
                &state.field,
                &mut state.events,
            ),
            BodyKind::Material { max_speed } => {
                material::update(body, &neighbors, &state.arena, max_speed, &mut state.events)
            }
        }
        body.assert_finite();
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::Arena;
    use crate::sim::body::{Body, GroupId};
    use crate::sim::field::PotentialField;
    use crate::sim::state::SimEvent;
    use glam::Vec2;

    fn hold(directions: Directions) -> TickInput {
        TickInput {
            directions,
            quit: false,
        }
    }

    #[test]
    fn test_tick_counts_and_clears_events() {
        let mut state = SimState::with_bodies(
            Arena::default(),
            PotentialField::flat(400, 300),
            vec![
                Body::robot(0, GroupId(1), Vec2::new(200.0, 150.0), 15.0),
                Body::material(1, GroupId(2), Vec2::new(220.0, 150.0), 20.0, 0.2),
            ],
        );
        let right = hold(Directions {
            right: true,
            ..Default::default()
        });

        tick(&mut state, &right);
        assert_eq!(state.time_ticks, 1);
        assert!(!state.events.is_empty());

        // Move the material away; the next tick reports nothing
        state.bodies[1].pos = Vec2::new(350.0, 250.0);
        state.bodies[1].vel = Vec2::ZERO;
        tick(&mut state, &right);
        assert_eq!(state.time_ticks, 2);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_later_bodies_see_same_tick_writes() {
        // Robot 0 moves first and merges with robot 1; robot 1 then updates
        // starting from the merged velocity, not its own stale one.
        let mut state = SimState::with_bodies(
            Arena::default(),
            PotentialField::flat(400, 300),
            vec![
                Body::robot(0, GroupId(1), Vec2::new(200.0, 150.0), 15.0),
                Body::robot(1, GroupId(2), Vec2::new(220.0, 150.0), 15.0)
                    .with_velocity(Vec2::new(0.0, 2.0)),
            ],
        );
        let up = hold(Directions {
            up: true,
            ..Default::default()
        });
        tick(&mut state, &up);

        // Robot 0: vel (0,-1) merged with (0,2) -> (0,0.5) for both.
        // Robot 1 integrates by that 0.5, input takes it to -0.5, and
        // merging back with robot 0's 0.5 cancels out.
        assert_eq!(state.bodies[1].pos, Vec2::new(220.0, 150.5));
        assert_eq!(state.bodies[0].vel, Vec2::ZERO);
        assert_eq!(state.bodies[1].vel, Vec2::ZERO);
        assert_eq!(state.events.len(), 2);
        assert!(matches!(
            state.events[0],
            SimEvent::Merge {
                robot: 0,
                other: 1,
                ..
            }
        ));
        assert!(matches!(
            state.events[1],
            SimEvent::Merge {
                robot: 1,
                other: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_robots_keep_inside_arena_in_default_scene() {
        let mut state = SimState::new();
        let inputs = [
            Directions {
                left: true,
                ..Default::default()
            },
            Directions {
                up: true,
                left: true,
                ..Default::default()
            },
            Directions {
                down: true,
                right: true,
                ..Default::default()
            },
            Directions::NONE,
        ];
        for input in inputs {
            for _ in 0..200 {
                tick(&mut state, &hold(input));
                for body in state.bodies.iter().filter(|b| b.is_robot()) {
                    assert!(state.arena.contains_circle(body.pos, body.radius()));
                }
            }
        }
        assert_eq!(state.time_ticks, 800);
    }

    #[test]
    fn test_determinism() {
        // Two states fed the same inputs end up byte-identical
        let mut state1 = SimState::new();
        let mut state2 = SimState::new();

        let inputs = [
            Directions {
                right: true,
                ..Default::default()
            },
            Directions {
                down: true,
                ..Default::default()
            },
            Directions {
                left: true,
                up: true,
                ..Default::default()
            },
            Directions::NONE,
        ];

        for input in inputs.iter().cycle().take(240) {
            tick(&mut state1, &hold(*input));
            tick(&mut state2, &hold(*input));
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(
            state1.snapshot().expect("serialize"),
            state2.snapshot().expect("serialize")
        );
    }
}
