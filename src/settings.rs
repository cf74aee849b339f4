//! Simulation settings and presentation variants
//!
//! The demo comes in several skins that share one core. A `Variant` says which
//! commands the core honors and which overlays a host should draw; `SimConfig`
//! holds the numeric parameters and is never mutated by the simulation.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::integrator::angular_velocity;
use crate::sim::{Domain, Hemisphere};

/// Presentation variants of the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Plain southern-hemisphere disc
    Classic,
    /// Classic with a star background
    Starfield,
    /// Stars plus compass and hemisphere labels
    Labeled,
    /// Labeled, with a runtime hemisphere toggle
    Hemispheres,
    /// Hemisphere toggle plus arrow-key velocity nudges
    Steerable,
    /// Everything, plus a live coordinate readout
    #[default]
    Readout,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Classic,
        Variant::Starfield,
        Variant::Labeled,
        Variant::Hemispheres,
        Variant::Steerable,
        Variant::Readout,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "Classic",
            Variant::Starfield => "Starfield",
            Variant::Labeled => "Labeled",
            Variant::Hemispheres => "Hemispheres",
            Variant::Steerable => "Steerable",
            Variant::Readout => "Readout",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "starfield" | "stars" => Some(Variant::Starfield),
            "labeled" | "labelled" => Some(Variant::Labeled),
            "hemispheres" | "toggle" => Some(Variant::Hemispheres),
            "steerable" | "arrows" => Some(Variant::Steerable),
            "readout" | "full" => Some(Variant::Readout),
            _ => None,
        }
    }

    /// Whether the hemisphere toggle command is honored
    pub fn allows_hemisphere_toggle(&self) -> bool {
        matches!(
            self,
            Variant::Hemispheres | Variant::Steerable | Variant::Readout
        )
    }

    /// Whether held direction keys nudge the particle
    pub fn allows_nudges(&self) -> bool {
        matches!(self, Variant::Steerable | Variant::Readout)
    }

    pub fn shows_stars(&self) -> bool {
        !matches!(self, Variant::Classic)
    }

    pub fn shows_labels(&self) -> bool {
        !matches!(self, Variant::Classic | Variant::Starfield)
    }

    pub fn shows_readout(&self) -> bool {
        matches!(self, Variant::Readout)
    }
}

/// Errors that can occur while loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("disc radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("disc of radius {radius} at {center} does not fit a {width}x{height} window")]
    DiscOutsideWindow {
        center: DVec2,
        radius: f64,
        width: f64,
        height: f64,
    },
    #[error("trail length must be at least 1")]
    EmptyTrail,
    #[error("frame rate must be at least 1")]
    ZeroFrameRate,
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
}

/// Immutable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Presentation variant
    pub variant: Variant,

    // === Geometry ===
    pub window_width: f64,
    pub window_height: f64,
    /// Disc center in screen pixels
    pub center: DVec2,
    /// Disc radius in pixels
    pub radius: f64,

    // === Dynamics ===
    /// Disc rotation in degrees per frame (also sets the pseudo-force strength)
    pub rotation_speed: f64,
    /// Initial downward speed of a spawned particle
    pub particle_speed: f64,
    /// Velocity delta per held direction key per frame
    pub velocity_step: f64,
    /// Starting hemisphere (ignored by variants without a toggle)
    pub hemisphere: Hemisphere,

    // === Display ===
    pub trail_length: usize,
    pub frame_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            center: DVec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
            radius: DISC_RADIUS,
            rotation_speed: ROTATION_SPEED,
            particle_speed: PARTICLE_SPEED,
            velocity_step: VELOCITY_STEP,
            hemisphere: Hemisphere::Southern,
            trail_length: TRAIL_LENGTH,
            frame_rate: FRAME_RATE,
        }
    }
}

impl SimConfig {
    /// Default parameters with the given variant
    pub fn from_preset(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Fresh domain described by this config
    pub fn domain(&self) -> Domain {
        Domain::new(self.center, self.radius)
    }

    /// Angular velocity in radians per frame
    pub fn omega(&self) -> f64 {
        angular_velocity(self.rotation_speed)
    }

    /// Seconds per frame
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.frame_rate.max(1) as f64
    }

    /// Initial velocity of a spawned particle (straight down the screen)
    pub fn initial_velocity(&self) -> DVec2 {
        DVec2::new(0.0, self.particle_speed)
    }

    /// Hemisphere the simulation starts in. Variants without a toggle are
    /// southern only.
    pub fn starting_hemisphere(&self) -> Hemisphere {
        if self.variant.allows_hemisphere_toggle() {
            self.hemisphere
        } else {
            Hemisphere::Southern
        }
    }

    /// Check the parameters describe a usable simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("center.x", self.center.x),
            ("center.y", self.center.y),
            ("rotation_speed", self.rotation_speed),
            ("particle_speed", self.particle_speed),
            ("velocity_step", self.velocity_step),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.radius));
        }

        let fits = self.center.x - self.radius >= 0.0
            && self.center.y - self.radius >= 0.0
            && self.center.x + self.radius <= self.window_width
            && self.center.y + self.radius <= self.window_height;
        if !fits {
            return Err(ConfigError::DiscOutsideWindow {
                center: self.center,
                radius: self.radius,
                width: self.window_width,
                height: self.window_height,
            });
        }

        if self.trail_length == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded config from {} (variant {})",
            path.display(),
            config.variant.as_str()
        );
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.center, DVec2::new(400.0, 400.0));
        assert_eq!(config.initial_velocity(), DVec2::new(0.0, 2.0));
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_variant_round_trip_names() {
        for v in Variant::ALL {
            assert_eq!(Variant::from_str(v.as_str()), Some(v));
        }
        assert_eq!(Variant::from_str("nope"), None);
    }

    #[test]
    fn test_variant_capabilities() {
        assert!(!Variant::Classic.allows_hemisphere_toggle());
        assert!(!Variant::Classic.shows_stars());
        assert!(Variant::Starfield.shows_stars());
        assert!(!Variant::Starfield.shows_labels());
        assert!(Variant::Hemispheres.allows_hemisphere_toggle());
        assert!(!Variant::Hemispheres.allows_nudges());
        assert!(Variant::Steerable.allows_nudges());
        assert!(Variant::Readout.shows_readout());
    }

    #[test]
    fn test_southern_only_variants_pin_hemisphere() {
        let mut config = SimConfig::from_preset(Variant::Classic);
        config.hemisphere = Hemisphere::Northern;
        assert_eq!(config.starting_hemisphere(), Hemisphere::Southern);

        config.variant = Variant::Hemispheres;
        assert_eq!(config.starting_hemisphere(), Hemisphere::Northern);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            SimConfig::from_json_str(r#"{ "variant": "Classic", "rotation_speed": 1.0 }"#).unwrap();
        assert_eq!(config.variant, Variant::Classic);
        assert_eq!(config.rotation_speed, 1.0);
        assert_eq!(config.radius, DISC_RADIUS);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimConfig::from_preset(Variant::Steerable);
        let json = config.to_json().unwrap();
        assert_eq!(SimConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_radius = SimConfig {
            radius: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            bad_radius.validate(),
            Err(ConfigError::InvalidRadius(_))
        ));

        let too_big = SimConfig {
            radius: 450.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            too_big.validate(),
            Err(ConfigError::DiscOutsideWindow { .. })
        ));

        let no_trail = SimConfig {
            trail_length: 0,
            ..SimConfig::default()
        };
        assert!(matches!(no_trail.validate(), Err(ConfigError::EmptyTrail)));

        let nan_speed = SimConfig {
            particle_speed: f64::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(
            nan_speed.validate(),
            Err(ConfigError::NotFinite {
                name: "particle_speed",
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            SimConfig::from_json_str("{ radius: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
