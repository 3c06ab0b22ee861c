//! # futsal_core - 5-a-side Match Flow & Player/Ball Arbitration
//!
//! Engine-independent rules layer for an arcade 5-a-side game.
//! The host engine feeds positions, velocities, goal triggers and input
//! intents in; the core answers with phase changes and arbitration results.
//!
//! ## Features
//! - Phase state machine with strict edge table and pause/resume snapshot
//! - Match clock, scoreboard, kickoff alternation, goal celebration timer
//! - Possession ownership, tackle cooldown/stun, nearest-player switching
//! - Goalkeeper lateral positioning and shot arrival prediction

// Config presets start from `Default` and override a few fields
#![allow(clippy::field_reassign_with_default)]

pub mod engine;
pub mod error;
pub mod models;

pub use engine::arbitration::{
    apply_dispossession, find_nearest, find_nearest_excluding, perform_switch, select_claimant,
    GoalkeeperGeometry, GoalkeeperPredictor, PossessionArbiter, PossessionChange, StunTimer,
    SwitchResult, SwitchSelector, TackleResolver, TackleResult,
};
pub use engine::config::{ArbitrationConfig, FlowConfig, MatchConfig};
pub use engine::match_flow::{
    CelebrationSequencer, KickoffAssignment, MatchClock, MatchFlowEvent, MatchPhase,
    MatchPhaseController, Period, ScoreChange, Scoreboard,
};
pub use error::{ConfigError, MatchFlowError, Result};
pub use models::{PitchPos, PlayerId, TeamSide};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
