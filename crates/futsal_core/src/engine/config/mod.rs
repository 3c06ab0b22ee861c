//! # Match Configuration Module
//!
//! Every tunable of the match core is a constructor parameter. The
//! (external) config-loading layer builds a `MatchConfig` and hands it to
//! `MatchPhaseController::new` and the arbitration components.
//!
//! ## Usage
//! ```rust
//! use futsal_core::engine::config::MatchConfig;
//!
//! let config = MatchConfig::default();
//! let quick = MatchConfig::quick_match();
//! assert!(quick.flow.half_duration_seconds < config.flow.half_duration_seconds);
//! ```
//!
//! ## Environment Variables
//!
//! - `FUTSAL_MATCH_PROFILE`: Select preset (quick, extended, default)

mod arbitration_config;
mod flow_config;

pub use arbitration_config::{ArbitrationConfig, GoalkeeperConfig, PossessionConfig, TackleConfig};
pub use flow_config::FlowConfig;

use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ConfigError;

/// Full match configuration (flow + arbitration)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchConfig {
    /// Phase/clock/kickoff/celebration tunables
    #[serde(default)]
    pub flow: FlowConfig,
    /// Possession/tackle/goalkeeper tunables
    #[serde(default)]
    pub arbitration: ArbitrationConfig,
}

impl MatchConfig {
    /// Short halves for exhibition play
    pub fn quick_match() -> Self {
        let mut cfg = Self::default();
        cfg.flow.half_duration_seconds = 90.0;
        cfg.flow.kickoff_delay_seconds = 0.5;
        cfg
    }

    /// Longer halves, stricter tackle cooldown
    pub fn extended() -> Self {
        let mut cfg = Self::default();
        cfg.flow.half_duration_seconds = 300.0;
        cfg.arbitration.tackle.cooldown_seconds = 1.5;
        cfg
    }

    pub fn from_env_or_default() -> Self {
        match env::var("FUTSAL_MATCH_PROFILE").unwrap_or_default().to_lowercase().as_str() {
            "quick" => Self::quick_match(),
            "extended" => Self::extended(),
            _ => Self::default(),
        }
    }

    /// Parse and validate a JSON config. Missing sections fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: MatchConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flow.validate()?;
        self.arbitration.validate()
    }
}

/// Reject non-finite or non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

/// Reject non-finite or negative values.
pub(crate) fn require_non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamSide;

    #[test]
    fn test_default_config() {
        let cfg = MatchConfig::default();
        assert!((cfg.flow.half_duration_seconds - 180.0).abs() < 0.01);
        assert!((cfg.flow.celebration_duration_seconds - 2.0).abs() < 0.01);
        assert!((cfg.flow.celebration_time_scale - 0.3).abs() < 0.01);
        assert_eq!(cfg.flow.initial_kicking_team, TeamSide::A);
        assert!((cfg.arbitration.tackle.radius - 1.5).abs() < 0.01);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        assert!(MatchConfig::quick_match().validate().is_ok());
        assert!(MatchConfig::extended().validate().is_ok());
        assert!(
            MatchConfig::extended().arbitration.tackle.cooldown_seconds
                > MatchConfig::default().arbitration.tackle.cooldown_seconds
        );
    }

    #[test]
    fn test_from_env_default() {
        // Without env var, should return default
        if env::var("FUTSAL_MATCH_PROFILE").is_err() {
            assert_eq!(MatchConfig::from_env_or_default(), MatchConfig::default());
        }
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = MatchConfig::quick_match();
        let json = cfg.to_json_string().expect("Should serialize");
        let parsed = MatchConfig::from_json_str(&json).expect("Should deserialize");
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = MatchConfig::from_json_str(r#"{"flow": {"half_duration_seconds": 60.0}}"#)
            .expect("partial config should parse");
        assert!((parsed.flow.half_duration_seconds - 60.0).abs() < 0.01);
        assert_eq!(parsed.arbitration, ArbitrationConfig::default());
    }

    #[test]
    fn test_invalid_half_duration_rejected() {
        let err = MatchConfig::from_json_str(r#"{"flow": {"half_duration_seconds": 0.0}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter { name: "half_duration_seconds", .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = MatchConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
