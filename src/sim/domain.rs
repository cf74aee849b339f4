//! The rotating disc that bounds the simulation
//!
//! The disc is a fixed circle in screen space. Its rotation angle only drives
//! the grid overlay a host draws; particle dynamics never read it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::wrap_degrees;

/// Circular simulation domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Disc center in screen pixels
    pub center: DVec2,
    /// Disc radius in pixels
    pub radius: f64,
    /// Grid rotation in degrees, kept in [0, 360)
    pub rotation_angle: f64,
}

impl Domain {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self {
            center,
            radius,
            rotation_angle: 0.0,
        }
    }

    /// Offset of a screen point from the disc center
    #[inline]
    pub fn to_local(&self, point: DVec2) -> DVec2 {
        point - self.center
    }

    #[inline]
    pub fn distance_from_center(&self, point: DVec2) -> f64 {
        self.to_local(point).length()
    }

    /// Whether a point may host a new particle (boundary included)
    #[inline]
    pub fn is_inside(&self, point: DVec2) -> bool {
        self.distance_from_center(point) <= self.radius
    }

    /// Whether a particle at this point has left the disc (strictly beyond the rim)
    #[inline]
    pub fn is_outside(&self, point: DVec2) -> bool {
        self.distance_from_center(point) > self.radius
    }

    /// Spin the grid by the given number of degrees
    pub fn advance_rotation(&mut self, degrees: f64) {
        self.rotation_angle = wrap_degrees(self.rotation_angle + degrees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn disc() -> Domain {
        Domain::new(DVec2::new(400.0, 400.0), 300.0)
    }

    #[test]
    fn test_center_is_inside() {
        let d = disc();
        assert!(d.is_inside(d.center));
        assert!(!d.is_outside(d.center));
    }

    #[test]
    fn test_rim_point_is_inside_not_outside() {
        let d = disc();
        for rim in [
            DVec2::new(400.0, 700.0),
            DVec2::new(400.0, 100.0),
            DVec2::new(100.0, 400.0),
            DVec2::new(700.0, 400.0),
        ] {
            assert!(d.is_inside(rim), "{rim:?} should be admitted");
            assert!(!d.is_outside(rim), "{rim:?} should not have exited");
        }
    }

    #[test]
    fn test_corner_is_outside() {
        let d = disc();
        assert!(!d.is_inside(DVec2::ZERO));
        assert!(d.is_outside(DVec2::new(800.0, 800.0)));
    }

    #[test]
    fn test_rotation_wraps() {
        let mut d = disc();
        for _ in 0..720 {
            d.advance_rotation(0.5);
        }
        assert!(d.rotation_angle < 1e-2 || d.rotation_angle > 359.99);
        d.advance_rotation(370.0);
        assert!(d.rotation_angle >= 0.0 && d.rotation_angle < 360.0);
    }

    proptest! {
        #[test]
        fn prop_inside_and_outside_are_complementary(
            x in -200.0f64..1000.0,
            y in -200.0f64..1000.0,
        ) {
            let d = disc();
            let p = DVec2::new(x, y);
            prop_assert_ne!(d.is_inside(p), d.is_outside(p));
        }

        #[test]
        fn prop_polar_points_respect_radius(
            r in 0.0f64..600.0,
            theta in 0.0f64..std::f64::consts::TAU,
        ) {
            let d = disc();
            let p = d.center + DVec2::new(theta.cos(), theta.sin()) * r;
            let dist = d.distance_from_center(p);
            prop_assert_eq!(d.is_inside(p), dist <= d.radius);
        }
    }
}
