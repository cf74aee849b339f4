//! Which side of the equator the disc represents

use serde::{Deserialize, Serialize};

/// Hemisphere convention for the deflection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Hemisphere {
    Northern,
    #[default]
    Southern,
}

impl Hemisphere {
    /// Multiplier applied to the pseudo-force (+1 southern, -1 northern)
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Hemisphere::Northern => -1.0,
            Hemisphere::Southern => 1.0,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Hemisphere::Northern => Hemisphere::Southern,
            Hemisphere::Southern => Hemisphere::Northern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "Northern",
            Hemisphere::Southern => "Southern",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "northern" | "north" | "n" => Some(Hemisphere::Northern),
            "southern" | "south" | "s" => Some(Hemisphere::Southern),
            _ => None,
        }
    }
}
