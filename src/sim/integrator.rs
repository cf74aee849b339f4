//! Rotating-frame pseudo-force and the explicit Euler update
//!
//! The force is a toy linearization: it rotates the velocity vector a little
//! each frame. Integration is forward Euler on purpose; switching to a
//! semi-implicit or higher-order scheme changes the trajectories.

use glam::DVec2;

/// Angular velocity in radians per frame for a rotation speed in degrees per frame
#[inline]
pub fn angular_velocity(rotation_speed_deg: f64) -> f64 {
    rotation_speed_deg.to_radians()
}

/// Coriolis-like acceleration computed from the current velocity
///
/// `(2 * omega * vy * sign, -2 * omega * vx * sign)`
#[inline]
pub fn coriolis_force(velocity: DVec2, omega: f64, sign: f64) -> DVec2 {
    DVec2::new(
        2.0 * omega * velocity.y * sign,
        -2.0 * omega * velocity.x * sign,
    )
}

/// Advance position and velocity by one frame
///
/// The force uses the pre-step velocity; the position update then uses the
/// post-force velocity. Returns `(position, velocity)`.
#[inline]
pub fn euler_step(position: DVec2, velocity: DVec2, omega: f64, sign: f64) -> (DVec2, DVec2) {
    let velocity = velocity + coriolis_force(velocity, omega, sign);
    (position + velocity, velocity)
}
