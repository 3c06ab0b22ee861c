//! Match Flow Controller
//!
//! Authoritative match state: phase state machine, clock, scoreboard,
//! kickoff assignment and goal-celebration sequencing.
//!
//! ## Goal Flow
//! ```text
//! goal trigger → Scoreboard.add_goal → KickoffAssignment.on_goal_scored →
//! GoalCelebration (slow motion, 2s real time) → PreKickoff →
//! kickoff delay → play resumes in the interrupted half
//! ```

mod celebration;
mod clock;
mod controller;
mod events;
mod kickoff;
mod match_phase;
mod scoreboard;


pub use celebration::CelebrationSequencer;
pub use clock::{MatchClock, PeriodChange};
pub use controller::MatchPhaseController;
pub use events::MatchFlowEvent;
pub use kickoff::{KickoffAssignment, BALL_CENTER};
pub use match_phase::{is_legal_transition, legal_targets, MatchPhase, Period};
pub use scoreboard::{ScoreChange, Scoreboard};
