//! Match clock: remaining time inside a half plus period transitions.

use serde::{Deserialize, Serialize};

use super::match_phase::{MatchPhase, Period};
use crate::engine::timestep::sanitize_dt;
use crate::error::{MatchFlowError, Result};

/// Period flip caused by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodChange {
    pub from: Period,
    pub to: Period,
}

/// Counts down one half at a time.
///
/// Invariant: `0 <= remaining_seconds <= half_duration_seconds`, and the
/// countdown only runs while the period is `FirstHalf` or `SecondHalf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchClock {
    half_duration_seconds: f32,
    remaining_seconds: f32,
    current_period: Period,
}

impl MatchClock {
    pub fn new(half_duration_seconds: f32) -> Self {
        let half = sanitize_dt(half_duration_seconds);
        Self { half_duration_seconds: half, remaining_seconds: half, current_period: Period::PreKickoff }
    }

    pub fn half_duration_seconds(&self) -> f32 {
        self.half_duration_seconds
    }

    pub fn remaining_seconds(&self) -> f32 {
        self.remaining_seconds
    }

    pub fn current_period(&self) -> Period {
        self.current_period
    }

    /// Time played in the current half.
    pub fn elapsed_seconds(&self) -> f32 {
        self.half_duration_seconds - self.remaining_seconds
    }

    /// Remaining time as (minutes, seconds), rounded up so "0:00" only shows at expiry.
    pub fn display_minutes_seconds(&self) -> (u32, u32) {
        let total = self.remaining_seconds.ceil() as u32;
        (total / 60, total % 60)
    }

    /// PreKickoff → FirstHalf with a full half on the clock.
    pub fn start_match(&mut self) -> Result<PeriodChange> {
        if self.current_period != Period::PreKickoff {
            return Err(MatchFlowError::invalid(self.current_period.into(), MatchPhase::FirstHalf));
        }
        self.remaining_seconds = self.half_duration_seconds;
        Ok(self.set_period(Period::FirstHalf))
    }

    /// HalfTime → SecondHalf with a full half on the clock.
    pub fn start_second_half(&mut self) -> Result<PeriodChange> {
        if self.current_period != Period::HalfTime {
            return Err(MatchFlowError::invalid(self.current_period.into(), MatchPhase::SecondHalf));
        }
        self.remaining_seconds = self.half_duration_seconds;
        Ok(self.set_period(Period::SecondHalf))
    }

    /// Advance by `dt` game seconds.
    ///
    /// Returns the period change when the half runs out. Outside a running
    /// half this does nothing.
    pub fn tick(&mut self, dt: f32) -> Option<PeriodChange> {
        if !self.current_period.is_running() {
            return None;
        }

        self.remaining_seconds = (self.remaining_seconds - sanitize_dt(dt)).max(0.0);
        log::trace!("clock {:?}: {:.3}s left", self.current_period, self.remaining_seconds);

        if self.remaining_seconds > 0.0 {
            return None;
        }
        let next = self.current_period.on_expiry()?;
        Some(self.set_period(next))
    }

    /// End the running half immediately (e.g. referee called it early).
    pub fn expire(&mut self) -> Option<PeriodChange> {
        let next = self.current_period.on_expiry()?;
        self.remaining_seconds = 0.0;
        Some(self.set_period(next))
    }

    pub fn reset(&mut self) {
        self.remaining_seconds = self.half_duration_seconds;
        self.current_period = Period::PreKickoff;
    }

    fn set_period(&mut self, to: Period) -> PeriodChange {
        let change = PeriodChange { from: self.current_period, to };
        self.current_period = to;
        log::debug!("clock period {:?} -> {:?}", change.from, change.to);
        change
    }
}
