//! The single tracer particle and its per-frame step

use std::collections::VecDeque;

use glam::DVec2;

use super::domain::Domain;
use super::integrator::euler_step;

/// Lifecycle of a particle. `Exited` is terminal: the owner drops the particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleState {
    Active,
    Exited,
}

/// A particle moving across the disc
///
/// Only constructed through `new`, so the trail never exceeds its capacity.
/// `Snapshot` is the serialized view.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: u32,
    pos: DVec2,
    vel: DVec2,
    /// Past positions, oldest first
    trail: VecDeque<DVec2>,
    trail_capacity: usize,
    state: ParticleState,
    /// Steps taken since spawn
    age: u64,
}

impl Particle {
    /// New active particle at `pos` with an empty trail
    pub fn new(id: u32, pos: DVec2, vel: DVec2, trail_capacity: usize) -> Self {
        Self {
            id,
            pos,
            vel,
            trail: VecDeque::with_capacity(trail_capacity + 1),
            trail_capacity,
            state: ParticleState::Active,
            age: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.pos
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    /// Trail points, oldest first
    pub fn trail(&self) -> impl ExactSizeIterator<Item = &DVec2> + '_ {
        self.trail.iter()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }

    pub fn state(&self) -> ParticleState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == ParticleState::Active
    }

    pub fn age(&self) -> u64 {
        self.age
    }

    /// Add a user-supplied delta to the velocity. No clamping.
    pub fn adjust_velocity(&mut self, delta: DVec2) {
        self.vel += delta;
    }

    /// Record current position, dropping the oldest point once full
    fn record_trail(&mut self) {
        self.trail.push_back(self.pos);
        while self.trail.len() > self.trail_capacity {
            self.trail.pop_front();
        }
    }

    /// Advance one frame. Returns `true` if the particle left the domain.
    ///
    /// Order: record trail, apply the pseudo-force from the pre-step velocity,
    /// move by the new velocity, then test the boundary.
    pub fn step(&mut self, domain: &Domain, omega: f64, sign: f64) -> bool {
        debug_assert!(self.is_active(), "stepping exited particle {}", self.id);

        self.record_trail();
        (self.pos, self.vel) = euler_step(self.pos, self.vel, omega, sign);
        self.age += 1;

        let exited = domain.is_outside(self.pos);
        if exited {
            self.state = ParticleState::Exited;
        }
        log::trace!(
            "particle {} step {}: pos={:?} vel={:?} exited={}",
            self.id,
            self.age,
            self.pos,
            self.vel,
            exited
        );
        exited
    }
}
