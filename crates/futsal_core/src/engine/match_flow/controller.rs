//! MatchPhaseController - top-level phase state machine.
//!
//! Single gate for every phase change. Owns the clock, scoreboard, kickoff
//! assignment and celebration sequencer so they can never disagree with the
//! current phase.
//!
//! ## Side-channels (not phase-table edges)
//! - `pause` / `resume`: snapshot and restore the interrupted phase
//! - kickoff restart: after a goal, `PreKickoff` returns to the half the
//!   clock is in once the kickoff delay has elapsed

use super::celebration::CelebrationSequencer;
use super::clock::{MatchClock, PeriodChange};
use super::events::MatchFlowEvent;
use super::kickoff::KickoffAssignment;
use super::match_phase::{is_legal_transition, MatchPhase, Period};
use super::scoreboard::{ScoreChange, Scoreboard};
use crate::engine::config::FlowConfig;
use crate::engine::timestep::{sanitize_dt, FrameTime};
use crate::error::{MatchFlowError, Result};
use crate::models::TeamSide;

#[derive(Debug, Clone)]
pub struct MatchPhaseController {
    config: FlowConfig,
    phase: MatchPhase,
    /// Phase interrupted by `pause`, `Some` iff phase is `Paused`
    paused_from: Option<MatchPhase>,
    clock: MatchClock,
    scoreboard: Scoreboard,
    kickoff: KickoffAssignment,
    celebration: CelebrationSequencer,
    /// Real seconds until play resumes after a goal
    kickoff_timer: Option<f32>,
    events: Vec<MatchFlowEvent>,
}

impl MatchPhaseController {
    pub fn new(config: FlowConfig) -> Self {
        Self {
            phase: MatchPhase::PreKickoff,
            paused_from: None,
            clock: MatchClock::new(config.half_duration_seconds),
            scoreboard: Scoreboard::new(),
            kickoff: KickoffAssignment::new(config.initial_kicking_team),
            celebration: CelebrationSequencer::new(
                config.celebration_duration_seconds,
                config.celebration_time_scale,
            ),
            kickoff_timer: None,
            events: Vec::new(),
            config,
        }
    }

    // ===========================================
    // Accessors
    // ===========================================

    pub fn current_phase(&self) -> MatchPhase {
        self.phase
    }

    /// Phase that `resume` will restore.
    pub fn paused_phase(&self) -> Option<MatchPhase> {
        self.paused_from
    }

    pub fn is_paused(&self) -> bool {
        self.phase == MatchPhase::Paused
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn remaining_seconds(&self) -> f32 {
        self.clock.remaining_seconds()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn kickoff(&self) -> &KickoffAssignment {
        &self.kickoff
    }

    pub fn kicking_team(&self) -> TeamSide {
        self.kickoff.kicking_team()
    }

    pub fn celebration(&self) -> &CelebrationSequencer {
        &self.celebration
    }

    /// Seconds of kickoff setup left, `None` when no restart is pending.
    pub fn kickoff_countdown(&self) -> Option<f32> {
        self.kickoff_timer
    }

    /// Engine time scale to apply: 0 while paused, slow motion while celebrating.
    pub fn time_scale(&self) -> f32 {
        if self.is_paused() {
            0.0
        } else {
            self.celebration.target_time_scale()
        }
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    // ===========================================
    // Events
    // ===========================================

    pub fn pending_events(&self) -> &[MatchFlowEvent] {
        &self.events
    }

    /// Hand queued events to the host (audio, UI, camera).
    ///
    /// Call once per tick: the queue only empties here or on `restart`.
    pub fn drain_events(&mut self) -> Vec<MatchFlowEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: MatchFlowEvent) {
        self.events.push(event);
    }

    fn emit_period(&mut self, change: PeriodChange) {
        self.emit(MatchFlowEvent::PeriodChanged { from: change.from, to: change.to });
    }

    // ===========================================
    // Phase transitions
    // ===========================================

    /// Edge-table check plus the clock agreement rule for restarts.
    pub fn can_transition_to(&self, target: MatchPhase) -> bool {
        if target == MatchPhase::Paused {
            return !self.is_paused();
        }
        if !is_legal_transition(self.phase, target) {
            return false;
        }
        match (self.phase, target) {
            (MatchPhase::PreKickoff, MatchPhase::FirstHalf) => {
                matches!(self.clock.current_period(), Period::PreKickoff | Period::FirstHalf)
            }
            _ => true,
        }
    }

    /// Move along one edge of the phase table.
    ///
    /// `Paused` is redirected to `pause()`. Any other target outside the
    /// current phase's edges fails and leaves every component untouched.
    pub fn transition_to(&mut self, target: MatchPhase) -> Result<()> {
        if target == MatchPhase::Paused {
            self.pause();
            return Ok(());
        }

        let from = self.phase;
        if !self.can_transition_to(target) {
            log::warn!("rejected phase transition {:?} -> {:?}", from, target);
            return Err(MatchFlowError::invalid(from, target));
        }

        match (from, target) {
            (MatchPhase::PreKickoff, MatchPhase::FirstHalf) => {
                if self.clock.current_period() == Period::PreKickoff {
                    let change = self.clock.start_match()?;
                    self.emit_period(change);
                    log::info!("kick off, {:?} to start", self.kickoff.kicking_team());
                }
                self.kickoff_timer = None;
            }
            (MatchPhase::FirstHalf, MatchPhase::HalfTime)
            | (MatchPhase::SecondHalf, MatchPhase::FullTime) => {
                if let Some(change) = self.clock.expire() {
                    self.emit_period(change);
                }
            }
            (MatchPhase::HalfTime, MatchPhase::SecondHalf) => {
                let change = self.clock.start_second_half()?;
                self.emit_period(change);
                let team = self.kickoff.on_second_half();
                self.emit(MatchFlowEvent::KickoffAssigned { team });
            }
            (MatchPhase::GoalCelebration, MatchPhase::PreKickoff) => {
                if self.celebration.complete_celebration() {
                    self.emit(MatchFlowEvent::CelebrationFinished);
                }
                self.celebration.take_pending_kickoff();
                self.kickoff_timer = Some(sanitize_dt(self.config.kickoff_delay_seconds));
            }
            _ => {}
        }

        self.set_phase(target);

        if target == MatchPhase::GoalCelebration && self.celebration.try_start_celebration() {
            let time_scale = self.celebration.target_time_scale();
            self.emit(MatchFlowEvent::CelebrationStarted { time_scale });
        }
        if target == MatchPhase::FullTime {
            self.log_full_time();
        }
        Ok(())
    }

    /// PreKickoff → FirstHalf. Only valid before the match has started.
    pub fn start_match(&mut self) -> Result<()> {
        if self.phase != MatchPhase::PreKickoff || self.clock.current_period() != Period::PreKickoff {
            return Err(MatchFlowError::invalid(self.phase, MatchPhase::FirstHalf));
        }
        self.transition_to(MatchPhase::FirstHalf)
    }

    /// HalfTime → SecondHalf with a fresh half on the clock.
    pub fn start_second_half(&mut self) -> Result<()> {
        self.transition_to(MatchPhase::SecondHalf)
    }

    /// Goal trigger from the physics layer.
    ///
    /// Order: scoreboard → kickoff assignment → GoalCelebration → slow motion.
    /// Rejected before anything changes when the ball is not in play.
    pub fn on_goal_scored(&mut self, scoring_team: TeamSide) -> Result<ScoreChange> {
        if !self.can_transition_to(MatchPhase::GoalCelebration) {
            log::warn!("goal by {:?} ignored in {:?}", scoring_team, self.phase);
            return Err(MatchFlowError::invalid(self.phase, MatchPhase::GoalCelebration));
        }

        let change = self.scoreboard.add_goal(scoring_team);
        self.emit(MatchFlowEvent::GoalScored { team: change.team, new_score: change.new_score });
        log::info!("goal {:?}, score now {:?}", scoring_team, self.scoreboard.scores());

        let team = self.kickoff.on_goal_scored(scoring_team);
        self.emit(MatchFlowEvent::KickoffAssigned { team });

        self.transition_to(MatchPhase::GoalCelebration)?;
        Ok(change)
    }

    // ===========================================
    // Pause side-channel
    // ===========================================

    /// Snapshot the current phase and enter `Paused`. `false` if already paused.
    pub fn pause(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        self.paused_from = Some(self.phase);
        self.set_phase(MatchPhase::Paused);
        true
    }

    /// Restore exactly the phase `pause` interrupted. `false` if not paused.
    pub fn resume(&mut self) -> bool {
        let Some(previous) = self.paused_from.take() else {
            return false;
        };
        self.set_phase(previous);
        true
    }

    // ===========================================
    // Tick
    // ===========================================

    /// Advance one simulation step.
    ///
    /// The clock runs on game time during play. Celebration and kickoff
    /// setup run on real time. Nothing moves while paused.
    pub fn tick(&mut self, frame: FrameTime) {
        match self.phase {
            MatchPhase::FirstHalf | MatchPhase::SecondHalf => {
                if let Some(change) = self.clock.tick(frame.dt) {
                    self.emit_period(change);
                    self.set_phase(change.to.into());
                    if change.to == Period::FullTime {
                        self.log_full_time();
                    }
                }
            }
            MatchPhase::GoalCelebration => {
                if self.celebration.tick(frame.unscaled_dt) {
                    self.emit(MatchFlowEvent::CelebrationFinished);
                    if self.celebration.take_pending_kickoff() {
                        if let Err(err) = self.transition_to(MatchPhase::PreKickoff) {
                            log::warn!("celebration exit failed: {}", err);
                        }
                    }
                }
            }
            MatchPhase::PreKickoff => self.advance_kickoff_setup(frame.unscaled_dt),
            MatchPhase::HalfTime | MatchPhase::FullTime | MatchPhase::Paused => {}
        }
    }

    fn advance_kickoff_setup(&mut self, unscaled_dt: f32) {
        let Some(remaining) = self.kickoff_timer else {
            return;
        };
        let remaining = remaining - sanitize_dt(unscaled_dt);
        if remaining > 0.0 {
            self.kickoff_timer = Some(remaining);
            return;
        }
        self.kickoff_timer = None;

        let resumed = match self.clock.current_period() {
            Period::FirstHalf => MatchPhase::FirstHalf,
            Period::SecondHalf => MatchPhase::SecondHalf,
            Period::PreKickoff | Period::HalfTime | Period::FullTime => return,
        };
        self.set_phase(resumed);
        let team = self.kickoff.kicking_team();
        self.emit(MatchFlowEvent::KickoffReady { team, resumed });
    }

    /// Throw everything away and start a fresh match with the same config.
    pub fn restart(&mut self) {
        log::debug!("match restart");
        *self = Self::new(self.config.clone());
    }

    fn log_full_time(&self) {
        let (a, b) = self.scoreboard.scores();
        log::info!("full time: A {} - {} B", a, b);
    }

    fn set_phase(&mut self, to: MatchPhase) {
        let from = self.phase;
        self.phase = to;
        log::debug!("phase {} -> {}", from.name(), to.name());
        self.emit(MatchFlowEvent::PhaseChanged { from, to });
    }
}

impl Default for MatchPhaseController {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}
