//! Goal celebration window.
//!
//! Slow motion for a fixed real-time window, then a one-shot kickoff signal.
//!
//! - Timer runs on unscaled time: slow motion must not stretch the window
//! - No stacking: a second goal signal while playing is ignored
//! - `pending_kickoff` is edge-triggered, reading it clears it

use serde::{Deserialize, Serialize};

use crate::engine::timestep::sanitize_dt;

pub const CELEBRATION_DURATION_SECONDS: f32 = 2.0;
pub const CELEBRATION_TIME_SCALE: f32 = 0.3;
pub const NORMAL_TIME_SCALE: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebrationSequencer {
    is_playing: bool,
    target_time_scale: f32,
    pending_kickoff: bool,
    /// Real seconds since the celebration started
    elapsed_unscaled: f32,
    duration_seconds: f32,
    slow_motion_scale: f32,
}

impl CelebrationSequencer {
    pub fn new(duration_seconds: f32, slow_motion_scale: f32) -> Self {
        Self {
            is_playing: false,
            target_time_scale: NORMAL_TIME_SCALE,
            pending_kickoff: false,
            elapsed_unscaled: 0.0,
            duration_seconds: sanitize_dt(duration_seconds),
            slow_motion_scale,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn target_time_scale(&self) -> f32 {
        self.target_time_scale
    }

    /// Real seconds left in the window (0 when idle).
    pub fn remaining_seconds(&self) -> f32 {
        if self.is_playing {
            (self.duration_seconds - self.elapsed_unscaled).max(0.0)
        } else {
            0.0
        }
    }

    /// Start slow motion. Returns `false` if a celebration is already running.
    pub fn try_start_celebration(&mut self) -> bool {
        if self.is_playing {
            log::debug!("celebration already playing, ignoring start");
            return false;
        }
        self.is_playing = true;
        self.target_time_scale = self.slow_motion_scale;
        self.elapsed_unscaled = 0.0;
        true
    }

    /// Advance the window by real (unscaled) time.
    ///
    /// Returns `true` on the tick the celebration completes.
    pub fn tick(&mut self, unscaled_dt: f32) -> bool {
        if !self.is_playing {
            return false;
        }
        self.elapsed_unscaled += sanitize_dt(unscaled_dt);
        if self.elapsed_unscaled >= self.duration_seconds {
            self.complete_celebration()
        } else {
            false
        }
    }

    /// End slow motion and raise the kickoff signal. No-op when idle.
    pub fn complete_celebration(&mut self) -> bool {
        if !self.is_playing {
            return false;
        }
        self.is_playing = false;
        self.target_time_scale = NORMAL_TIME_SCALE;
        self.pending_kickoff = true;
        self.elapsed_unscaled = 0.0;
        true
    }

    /// One-shot read of the kickoff signal.
    pub fn take_pending_kickoff(&mut self) -> bool {
        std::mem::take(&mut self.pending_kickoff)
    }

    /// Peek without consuming.
    pub fn has_pending_kickoff(&self) -> bool {
        self.pending_kickoff
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.duration_seconds, self.slow_motion_scale);
    }
}

impl Default for CelebrationSequencer {
    fn default() -> Self {
        Self::new(CELEBRATION_DURATION_SECONDS, CELEBRATION_TIME_SCALE)
    }
}
