//! Deterministic simulation module
//!
//! Everything that moves lives here. This module must stay pure:
//! - One step per frame, independent of wall-clock time
//! - Forward Euler integration only
//! - No rendering or platform dependencies

pub mod domain;
pub mod hemisphere;
pub mod integrator;
pub mod particle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use domain::Domain;
pub use hemisphere::Hemisphere;
pub use integrator::{angular_velocity, coriolis_force, euler_step};
pub use particle::{Particle, ParticleState};
pub use snapshot::{ParticleView, Snapshot};
pub use state::SimState;
pub use tick::{Command, HeldKeys, SimEvent, TickInput, TickReport, tick};
