//! Scripted input for headless runs
//!
//! Plays the part of a user: clicks somewhere in the window whenever the disc
//! is empty, sometimes flips the hemisphere, sometimes holds an arrow key.
//! Seeded, so a given seed always produces the same session.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::settings::SimConfig;
use crate::sim::{Command, HeldKeys, SimState, TickInput};

/// Frames to wait on an empty disc before clicking
const IDLE_FRAMES: u32 = 30;
/// Per-frame chance of flipping the hemisphere while a particle is alive
const TOGGLE_CHANCE: f64 = 0.002;
/// Per-frame chance of starting or releasing a key hold
const KEY_CHANCE: f64 = 0.02;

pub struct Autopilot {
    rng: Pcg32,
    idle: u32,
    held: HeldKeys,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            idle: 0,
            held: HeldKeys::default(),
        }
    }

    /// Decide this frame's input from the current state
    pub fn next_input(&mut self, state: &SimState, config: &SimConfig) -> TickInput {
        let mut input = TickInput::default();

        if state.particle().is_none() {
            self.held = HeldKeys::default();
            self.idle += 1;
            if self.idle >= IDLE_FRAMES {
                self.idle = 0;
                // Anywhere in the window; misses off the disc get rejected
                let click = DVec2::new(
                    self.rng.random_range(0.0..config.window_width),
                    self.rng.random_range(0.0..config.window_height),
                );
                input.commands.push(Command::Spawn(click));
            }
            return input;
        }

        if config.variant.allows_hemisphere_toggle() && self.rng.random_bool(TOGGLE_CHANCE) {
            input.commands.push(Command::ToggleHemisphere);
        }

        if config.variant.allows_nudges() && self.rng.random_bool(KEY_CHANCE) {
            self.held = if self.held.any() {
                HeldKeys::default()
            } else {
                match self.rng.random_range(0..4) {
                    0 => HeldKeys {
                        up: true,
                        ..Default::default()
                    },
                    1 => HeldKeys {
                        down: true,
                        ..Default::default()
                    },
                    2 => HeldKeys {
                        left: true,
                        ..Default::default()
                    },
                    _ => HeldKeys {
                        right: true,
                        ..Default::default()
                    },
                }
            };
        }
        input.held = self.held;
        input
    }
}
