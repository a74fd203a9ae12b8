use serde::{Deserialize, Serialize};
use crate::constants::{DEFAULT_DWELL_TICKS, DEFAULT_SPEED, DEFAULT_TICK_INTERVAL_MS};
use crate::simulation::MotionProfile;

/// Tunables of the train simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Timer period between ticks
    pub tick_interval_ms: u32,
    /// Segments traversed per second while moving
    pub speed: f64,
    /// Ticks spent at each station after arriving
    pub dwell_ticks: u32,
    /// Fixed seed for the start offsets; a time-based seed is used when absent
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            speed: DEFAULT_SPEED,
            dwell_ticks: DEFAULT_DWELL_TICKS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON configuration, filling absent keys with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse simulation config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable simulation
    ///
    /// # Errors
    ///
    /// Returns an error if the tick interval is zero or the speed is not a
    /// positive finite number
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be greater than zero".to_string());
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(format!("speed must be a positive number, got {}", self.speed));
        }
        Ok(())
    }

    /// Per-tick motion derived from speed and tick interval
    #[must_use]
    pub fn motion_profile(&self) -> MotionProfile {
        let tick_seconds = f64::from(self.tick_interval_ms) / 1000.0;
        MotionProfile {
            progress_per_tick: self.speed * tick_seconds,
            dwell_ticks: self.dwell_ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.dwell_ticks, 40);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = SimulationConfig::from_json(r#"{"dwell_ticks": 5, "seed": 7}"#)
            .expect("valid config");
        assert_eq!(config.dwell_ticks, 5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(config.speed, DEFAULT_SPEED);
    }

    #[test]
    fn test_from_json_rejects_zero_interval() {
        let err = SimulationConfig::from_json(r#"{"tick_interval_ms": 0}"#)
            .expect_err("zero interval");
        assert!(err.contains("tick_interval_ms"));
    }

    #[test]
    fn test_from_json_rejects_negative_speed() {
        assert!(SimulationConfig::from_json(r#"{"speed": -1.0}"#).is_err());
    }

    #[test]
    fn test_from_json_malformed() {
        let err = SimulationConfig::from_json("{").expect_err("malformed");
        assert!(err.starts_with("Failed to parse simulation config"));
    }

    #[test]
    fn test_motion_profile() {
        let config = SimulationConfig {
            tick_interval_ms: 100,
            speed: 0.5,
            dwell_ticks: 3,
            seed: None,
        };
        let profile = config.motion_profile();
        assert!((profile.progress_per_tick - 0.05).abs() < 1e-12);
        assert_eq!(profile.dwell_ticks, 3);
    }
}
