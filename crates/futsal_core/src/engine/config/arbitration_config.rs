//! Player/Ball Arbitration Configuration

use serde::{Deserialize, Serialize};

use super::require_non_negative;
use crate::engine::arbitration::goalkeeper_constants as gk;
use crate::error::ConfigError;

/// Possession/tackle/goalkeeper tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArbitrationConfig {
    pub possession: PossessionConfig,
    pub tackle: TackleConfig,
    pub goalkeeper: GoalkeeperConfig,
}

impl ArbitrationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("claim_radius", self.possession.claim_radius)?;
        require_non_negative("tackle_radius", self.tackle.radius)?;
        require_non_negative("tackle_cooldown_seconds", self.tackle.cooldown_seconds)?;
        require_non_negative("stun_seconds", self.tackle.stun_seconds)?;
        self.goalkeeper.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    /// Loose-ball pickup distance in meters (default: 1.0)
    pub claim_radius: f32,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self { claim_radius: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TackleConfig {
    /// Max distance to the ball holder (default: 1.5)
    pub radius: f32,
    /// Min time between attempts (default: 1.0)
    pub cooldown_seconds: f32,
    /// Victim input freeze after dispossession (default: 0.5)
    pub stun_seconds: f32,
}

impl Default for TackleConfig {
    fn default() -> Self {
        Self { radius: 1.5, cooldown_seconds: 1.0, stun_seconds: 0.5 }
    }
}

/// Goal geometry plus the prediction thresholds.
///
/// The ratio/threshold values are game-design choices, not rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalkeeperConfig {
    /// Half width of the area the keeper may cover (default: 2.5)
    pub goal_area_half_width: f32,
    /// Goal line X (default: 20.0)
    pub goal_center_x: f32,
    /// Goal centre Z (default: 0.0)
    pub goal_center_z: f32,
    /// Share of the way from goal centre toward the ball (default: 0.6)
    pub lateral_ratio: f32,
    /// Min cosine between ball velocity and ball-to-goal direction (default: 0.5 = 60°)
    pub shot_alignment_threshold: f32,
    /// Min ball speed to count as a shot (default: 8.0)
    pub shot_speed_threshold: f32,
    /// Extra width outside the goal area that still counts as a near miss (default: 1.5)
    pub near_miss_margin: f32,
}

impl Default for GoalkeeperConfig {
    fn default() -> Self {
        Self {
            goal_area_half_width: 2.5,
            goal_center_x: 20.0,
            goal_center_z: 0.0,
            lateral_ratio: gk::LATERAL_RATIO,
            shot_alignment_threshold: gk::SHOT_ALIGNMENT_THRESHOLD,
            shot_speed_threshold: gk::SHOT_SPEED_THRESHOLD,
            near_miss_margin: gk::NEAR_MISS_MARGIN,
        }
    }
}

impl GoalkeeperConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("goal_area_half_width", self.goal_area_half_width)?;
        require_non_negative("near_miss_margin", self.near_miss_margin)?;
        require_non_negative("shot_speed_threshold", self.shot_speed_threshold)?;
        if !self.goal_center_x.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "goal_center_x",
                value: self.goal_center_x,
            });
        }
        if !self.goal_center_z.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "goal_center_z",
                value: self.goal_center_z,
            });
        }
        if !(0.0..=1.0).contains(&self.lateral_ratio) {
            return Err(ConfigError::InvalidParameter {
                name: "lateral_ratio",
                value: self.lateral_ratio,
            });
        }
        if !(-1.0..=1.0).contains(&self.shot_alignment_threshold) {
            return Err(ConfigError::InvalidParameter {
                name: "shot_alignment_threshold",
                value: self.shot_alignment_threshold,
            });
        }
        Ok(())
    }
}
