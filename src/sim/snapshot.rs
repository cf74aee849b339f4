//! Read-only view of the simulation for drawing or dumping

use glam::DVec2;
use serde::Serialize;

use super::hemisphere::Hemisphere;
use super::state::SimState;

/// What a host needs to draw the particle
#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub id: u32,
    pub position: DVec2,
    pub velocity: DVec2,
    pub speed: f64,
    /// Position relative to the disc center (coordinate readout)
    pub local: DVec2,
    /// Oldest first
    pub trail: Vec<DVec2>,
}

/// A frame's worth of drawable state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub center: DVec2,
    pub radius: f64,
    pub rotation_angle: f64,
    pub hemisphere: Hemisphere,
    pub particle: Option<ParticleView>,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        let particle = state.particle().map(|p| ParticleView {
            id: p.id,
            position: p.position(),
            velocity: p.velocity(),
            speed: p.velocity().length(),
            local: state.domain.to_local(p.position()),
            trail: p.trail().copied().collect(),
        });
        Self {
            frame: state.frame,
            center: state.domain.center,
            radius: state.domain.radius,
            rotation_angle: state.domain.rotation_angle,
            hemisphere: state.hemisphere,
            particle,
        }
    }
}
