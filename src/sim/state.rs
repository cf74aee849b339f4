//! Mutable simulation state owned by the host loop

use glam::DVec2;

use super::domain::Domain;
use super::hemisphere::Hemisphere;
use super::particle::Particle;
use crate::settings::SimConfig;

/// Everything that changes from frame to frame
///
/// Holds at most one particle. Particles carry ids so the slot can become an
/// id-keyed map without changing the command surface.
#[derive(Debug, Clone)]
pub struct SimState {
    pub domain: Domain,
    pub hemisphere: Hemisphere,
    /// Frames simulated so far
    pub frame: u64,
    particle: Option<Particle>,
    next_id: u32,
}

impl SimState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            domain: config.domain(),
            hemisphere: config.starting_hemisphere(),
            frame: 0,
            particle: None,
            next_id: 1,
        }
    }

    /// Allocate a new particle id. Wraps after `u32::MAX`; only one particle
    /// is alive at a time, so ids never collide.
    fn next_particle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn particle(&self) -> Option<&Particle> {
        self.particle.as_ref()
    }

    /// Spawn a particle at `point` if it lies on the disc, replacing any
    /// current one. Outside points leave the state untouched.
    pub fn spawn(&mut self, point: DVec2, config: &SimConfig) -> Option<&Particle> {
        if !self.domain.is_inside(point) {
            log::debug!("spawn at {point:?} rejected: outside disc");
            return None;
        }
        let id = self.next_particle_id();
        if let Some(old) = &self.particle {
            log::debug!("particle {} replaced by {id}", old.id);
        }
        self.particle = Some(Particle::new(
            id,
            point,
            config.initial_velocity(),
            config.trail_length,
        ));
        log::debug!("spawned particle {id} at {point:?}");
        self.particle.as_ref()
    }

    /// Flip the hemisphere and drop the current particle.
    /// Returns the id of the destroyed particle, if any.
    pub fn toggle_hemisphere(&mut self) -> Option<u32> {
        self.hemisphere = self.hemisphere.toggled();
        let destroyed = self.particle.take().map(|p| p.id);
        log::debug!(
            "hemisphere -> {} (destroyed particle {:?})",
            self.hemisphere.as_str(),
            destroyed
        );
        destroyed
    }

    /// Nudge the current particle's velocity. No-op without a particle.
    pub fn adjust_velocity(&mut self, delta: DVec2) {
        if let Some(p) = self.particle.as_mut() {
            p.adjust_velocity(delta);
        }
    }

    /// Step the current particle once and discard it if it left the disc.
    /// Returns the discarded particle, in its final `Exited` state.
    pub fn step_particle(&mut self, omega: f64) -> Option<Particle> {
        let sign = self.hemisphere.sign();
        let particle = self.particle.as_mut()?;
        if !particle.step(&self.domain, omega, sign) {
            return None;
        }
        let exited = self.particle.take();
        if let Some(p) = &exited {
            log::debug!("particle {} left the disc at {:?}", p.id, p.position());
        }
        exited
    }
}
