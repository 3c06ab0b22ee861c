//! Match Flow Configuration

use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_positive};
use crate::error::ConfigError;
use crate::models::TeamSide;

/// Phase/clock/kickoff/celebration tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Length of one half in game seconds (default: 180.0)
    pub half_duration_seconds: f32,
    /// Team kicking off the first half (default: A)
    pub initial_kicking_team: TeamSide,
    /// Goal celebration window, real time (default: 2.0)
    pub celebration_duration_seconds: f32,
    /// Slow-motion scale during the celebration (default: 0.3)
    pub celebration_time_scale: f32,
    /// Real-time delay between kickoff setup and play resuming (default: 1.0)
    pub kickoff_delay_seconds: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            half_duration_seconds: 180.0,
            initial_kicking_team: TeamSide::A,
            celebration_duration_seconds: 2.0,
            celebration_time_scale: 0.3,
            kickoff_delay_seconds: 1.0,
        }
    }
}

impl FlowConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("half_duration_seconds", self.half_duration_seconds)?;
        require_non_negative("celebration_duration_seconds", self.celebration_duration_seconds)?;
        require_positive("celebration_time_scale", self.celebration_time_scale)?;
        require_non_negative("kickoff_delay_seconds", self.kickoff_delay_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_time_scale_rejected() {
        let cfg = FlowConfig { celebration_time_scale: 0.0, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_kickoff_delay_allowed() {
        let cfg = FlowConfig { kickoff_delay_seconds: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }
}
