//! Simulation settings
//!
//! Knobs the host exposes in its tuning panel. The host owns these and may
//! rewrite them at any time; the simulation reads them by value once per tick
//! and never writes them back.

use serde::{Deserialize, Serialize};

/// Host-adjustable simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimSettings {
    // === Physics feel ===
    /// Wall/body restitution multiplier (0 = dead stop, 1 = fully elastic)
    pub damping: f32,
    /// Spring stiffness forwarded to host radius animations; the integrator
    /// itself never uses it
    pub stiffness: f32,
    /// Synthetic-noise drift instead of sensor gravity
    pub drift_mode: bool,

    // === Feedback ===
    /// Emit sound cue requests
    pub sound_enabled: bool,
    /// Emit haptic pulse requests
    pub haptics_enabled: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            damping: 0.8,
            stiffness: 120.0,
            drift_mode: false,
            sound_enabled: true,
            haptics_enabled: true,
        }
    }
}

impl SimSettings {
    /// Copy with the numeric fields forced into their valid ranges. The tick
    /// runs on the clamped copy so a wild slider value can't blow up the
    /// integration.
    pub fn clamped(self) -> Self {
        Self {
            damping: self.damping.clamp(0.0, 1.0),
            stiffness: self.stiffness.max(0.0),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let s = SimSettings::default();
        assert_eq!(s, s.clamped());
        assert!(s.sound_enabled);
        assert!(s.haptics_enabled);
        assert!(!s.drift_mode);
    }

    #[test]
    fn test_clamped_limits() {
        let s = SimSettings {
            damping: 1.7,
            stiffness: -5.0,
            ..Default::default()
        };
        let c = s.clamped();
        assert_eq!(c.damping, 1.0);
        assert_eq!(c.stiffness, 0.0);

        let s = SimSettings {
            damping: -0.3,
            ..Default::default()
        };
        assert_eq!(s.clamped().damping, 0.0);
    }
}
