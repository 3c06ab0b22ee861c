use thiserror::Error;

use crate::engine::match_flow::MatchPhase;

/// Failures of the match flow state machine.
///
/// Only illegal transitions are errors. Redundant requests (double pause,
/// double celebration, tackle on cooldown, ...) return "did nothing" values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchFlowError {
    #[error("Invalid transition: {from:?} -> {to:?}")]
    InvalidTransition { from: MatchPhase, to: MatchPhase },
}

impl MatchFlowError {
    pub fn invalid(from: MatchPhase, to: MatchPhase) -> Self {
        MatchFlowError::InvalidTransition { from, to }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MatchFlowError>;
