use serde::{Deserialize, Serialize};

use super::match_phase::{MatchPhase, Period};
use crate::models::TeamSide;

/// Observable match-flow changes, queued for the host to drain each tick.
///
/// Presentation (whistles, crowd cheer, scoreboard widget, slow-mo camera)
/// reacts to these; the core does not know what plays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MatchFlowEvent {
    /// Any change of `current_phase`, including pause/resume and kickoff restarts
    PhaseChanged { from: MatchPhase, to: MatchPhase },
    /// Clock period flip (match start, half expiry, second half start)
    PeriodChanged { from: Period, to: Period },
    GoalScored { team: TeamSide, new_score: u32 },
    KickoffAssigned { team: TeamSide },
    CelebrationStarted { time_scale: f32 },
    CelebrationFinished,
    /// Kickoff setup done, play resumed in `resumed`
    KickoffReady { team: TeamSide, resumed: MatchPhase },
}

impl MatchFlowEvent {
    /// Whistle cue: half starts/ends and restarts after a goal.
    pub fn is_whistle(&self) -> bool {
        match self {
            MatchFlowEvent::PeriodChanged { .. } | MatchFlowEvent::KickoffReady { .. } => true,
            MatchFlowEvent::PhaseChanged { .. }
            | MatchFlowEvent::GoalScored { .. }
            | MatchFlowEvent::KickoffAssigned { .. }
            | MatchFlowEvent::CelebrationStarted { .. }
            | MatchFlowEvent::CelebrationFinished => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = MatchFlowEvent::GoalScored { team: TeamSide::B, new_score: 2 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"event":"goal_scored","team":"B","new_score":2}"#);

        let parsed: MatchFlowEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_whistle_cues() {
        assert!(MatchFlowEvent::PeriodChanged { from: Period::FirstHalf, to: Period::HalfTime }
            .is_whistle());
        assert!(!MatchFlowEvent::CelebrationFinished.is_whistle());
    }
}
