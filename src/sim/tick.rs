//! Per-frame simulation tick
//!
//! One call advances the simulation exactly one frame: discrete commands in
//! arrival order, then held direction keys, then the disc rotation, then the
//! particle step.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::hemisphere::Hemisphere;
use super::state::SimState;
use crate::settings::SimConfig;

/// Discrete input events, applied in the order received
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Click at a screen point
    Spawn(DVec2),
    /// Switch between northern and southern deflection
    ToggleHemisphere,
}

/// Direction keys held down during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Velocity deltas for the held keys, one per key, in screen axes (y down)
    pub fn deltas(&self, step: f64) -> impl Iterator<Item = DVec2> {
        [
            (self.up, DVec2::new(0.0, -step)),
            (self.down, DVec2::new(0.0, step)),
            (self.left, DVec2::new(-step, 0.0)),
            (self.right, DVec2::new(step, 0.0)),
        ]
        .into_iter()
        .filter_map(|(held, delta)| held.then_some(delta))
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
    pub held: HeldKeys,
}

/// Something the host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    Spawned { id: u32, at: DVec2 },
    SpawnRejected { at: DVec2 },
    HemisphereToggled {
        now: Hemisphere,
        destroyed: Option<u32>,
    },
    ParticleExited { id: u32, at: DVec2 },
}

/// Outcome of one frame
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub events: Vec<SimEvent>,
}

impl TickReport {
    /// Whether a particle left the disc this frame
    pub fn exited(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SimEvent::ParticleExited { .. }))
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, config: &SimConfig, input: &TickInput) -> TickReport {
    let mut report = TickReport::default();

    for command in &input.commands {
        match *command {
            Command::Spawn(at) => match state.spawn(at, config) {
                Some(p) => report.events.push(SimEvent::Spawned { id: p.id, at }),
                None => report.events.push(SimEvent::SpawnRejected { at }),
            },
            Command::ToggleHemisphere => {
                if !config.variant.allows_hemisphere_toggle() {
                    log::debug!(
                        "hemisphere toggle ignored by {} variant",
                        config.variant.as_str()
                    );
                    continue;
                }
                let destroyed = state.toggle_hemisphere();
                report.events.push(SimEvent::HemisphereToggled {
                    now: state.hemisphere,
                    destroyed,
                });
            }
        }
    }

    if input.held.any() {
        if config.variant.allows_nudges() {
            for delta in input.held.deltas(config.velocity_step) {
                state.adjust_velocity(delta);
            }
        } else {
            log::trace!("nudges ignored by {} variant", config.variant.as_str());
        }
    }

    state.domain.advance_rotation(config.rotation_speed);

    if let Some(gone) = state.step_particle(config.omega()) {
        report.events.push(SimEvent::ParticleExited {
            id: gone.id,
            at: gone.position(),
        });
    }

    state.frame += 1;
    report
}
