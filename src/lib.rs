//! Coriolis Disc - particle deflection on a rotating disc
//!
//! Core modules:
//! - `sim`: Deterministic simulation (domain, particle integrator, commands)
//! - `settings`: Simulation configuration and presentation variants
//! - `clock`: Fixed-rate frame pacing for hosts driven by wall-clock time
//! - `autopilot`: Seeded scripted input for headless runs

pub mod autopilot;
pub mod clock;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use settings::{ConfigError, SimConfig, Variant};

/// Simulation configuration constants
pub mod consts {
    /// Window dimensions in pixels
    pub const WINDOW_WIDTH: f64 = 800.0;
    pub const WINDOW_HEIGHT: f64 = 800.0;

    /// Radius of the rotating disc
    pub const DISC_RADIUS: f64 = 300.0;

    /// Disc rotation in degrees per frame
    pub const ROTATION_SPEED: f64 = 0.5;

    /// Initial particle speed (pixels per frame, straight down the screen)
    pub const PARTICLE_SPEED: f64 = 2.0;

    /// Velocity added per frame while a direction key is held
    pub const VELOCITY_STEP: f64 = 0.1;

    /// Maximum number of trail points kept per particle
    pub const TRAIL_LENGTH: usize = 100;

    /// Fixed frame rate of the simulation
    pub const FRAME_RATE: u32 = 60;
    /// Maximum frames run per host update to prevent spiral of death
    pub const MAX_FRAMES_PER_UPDATE: u32 = 8;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
