//! Tackle System
//!
//! Lunge → (dispossess) → cooldown, plus the victim's stun.
//!
//! ## Attempt Flow
//! ```text
//! attempt_tackle (range + cooldown gate) → lunging → complete_lunge →
//! cooldown (measured from the attempt timestamp) → ready
//! ```
//!
//! Rejected attempts are routine (button mashing, out of range) and return
//! an empty `TackleResult`, never an error.

use serde::{Deserialize, Serialize};

use super::possession::{PossessionArbiter, PossessionChange};
use crate::engine::config::TackleConfig;
use crate::models::PlayerId;

pub const DEFAULT_TACKLE_RADIUS: f32 = 1.5;
pub const DEFAULT_COOLDOWN_SECONDS: f32 = 1.0;
pub const DEFAULT_STUN_SECONDS: f32 = 0.5;

/// Outcome of one tackle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TackleResult {
    /// Lunge animation should play (also the camera-shake trigger)
    pub did_lunge: bool,
    /// Victim loses the ball
    pub did_dispossess: bool,
    /// Victim input freeze, 0 when nothing happened
    pub stun_duration: f32,
}

impl TackleResult {
    /// Attempt rejected: no lunge, no dispossession.
    pub fn rejected() -> Self {
        Self::default()
    }
}

/// Per-tackler attempt state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TackleResolver {
    radius: f32,
    cooldown_seconds: f32,
    stun_seconds: f32,
    is_lunging: bool,
    /// Timestamp of the last accepted attempt (`None` = never tackled)
    last_attempt: Option<f32>,
}

impl TackleResolver {
    pub fn new(radius: f32, cooldown_seconds: f32, stun_seconds: f32) -> Self {
        Self { radius, cooldown_seconds, stun_seconds, is_lunging: false, last_attempt: None }
    }

    pub fn from_config(config: &TackleConfig) -> Self {
        Self::new(config.radius, config.cooldown_seconds, config.stun_seconds)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_lunging(&self) -> bool {
        self.is_lunging
    }

    pub fn last_attempt(&self) -> Option<f32> {
        self.last_attempt
    }

    /// Seconds until the cooldown ends (0 when ready or never used).
    pub fn cooldown_remaining(&self, now: f32) -> f32 {
        match self.last_attempt {
            Some(t) => (self.cooldown_seconds - (now - t)).max(0.0),
            None => 0.0,
        }
    }

    fn on_cooldown(&self, now: f32) -> bool {
        match self.last_attempt {
            Some(t) => now - t < self.cooldown_seconds,
            None => false,
        }
    }

    pub fn can_attempt(&self, distance_to_target: f32, now: f32) -> bool {
        if self.is_lunging || self.on_cooldown(now) {
            return false;
        }
        // NaN distance counts as out of range
        distance_to_target <= self.radius
    }

    pub fn attempt_tackle(&mut self, distance_to_target: f32, now: f32) -> TackleResult {
        if !self.can_attempt(distance_to_target, now) {
            return TackleResult::rejected();
        }

        self.is_lunging = true;
        self.last_attempt = Some(now);

        // Always true past the gate; kept as the explicit contract surface
        let did_dispossess = distance_to_target <= self.radius;
        let result = TackleResult {
            did_lunge: true,
            did_dispossess,
            stun_duration: if did_dispossess { self.stun_seconds } else { 0.0 },
        };
        log::debug!(
            "tackle at t={:.2} dist={:.2}: dispossess={}",
            now,
            distance_to_target,
            result.did_dispossess
        );
        result
    }

    /// Lunge motion finished; the cooldown window keeps running from the attempt.
    pub fn complete_lunge(&mut self) {
        self.is_lunging = false;
    }

    pub fn reset(&mut self) {
        self.is_lunging = false;
        self.last_attempt = None;
    }
}

impl Default for TackleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TACKLE_RADIUS, DEFAULT_COOLDOWN_SECONDS, DEFAULT_STUN_SECONDS)
    }
}

/// Movement-input freeze on a dispossessed player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StunTimer {
    stunned_until: Option<f32>,
}

impl StunTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze until `now + duration`. Never shortens a running stun.
    pub fn apply(&mut self, now: f32, duration: f32) {
        if duration.is_nan() || duration <= 0.0 {
            return;
        }
        let until = now + duration;
        self.stunned_until = Some(match self.stunned_until {
            Some(existing) => existing.max(until),
            None => until,
        });
    }

    pub fn is_stunned(&self, now: f32) -> bool {
        matches!(self.stunned_until, Some(until) if now < until)
    }

    pub fn remaining(&self, now: f32) -> f32 {
        self.stunned_until.map_or(0.0, |until| (until - now).max(0.0))
    }

    pub fn clear(&mut self) {
        self.stunned_until = None;
    }
}

/// Apply a tackle result to the victim: stun, and loose ball if they held it.
///
/// Returns the possession notification when the ball actually went loose.
pub fn apply_dispossession(
    result: &TackleResult,
    victim: PlayerId,
    possession: &mut PossessionArbiter,
    victim_stun: &mut StunTimer,
    now: f32,
) -> Option<PossessionChange> {
    if !result.did_dispossess {
        return None;
    }
    victim_stun.apply(now, result.stun_duration);
    if possession.is_owned_by(victim) {
        possession.release()
    } else {
        None
    }
}
