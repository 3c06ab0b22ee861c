//! Match phases and the legal transition table.

use serde::{Deserialize, Serialize};

/// Top-level match mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    PreKickoff,
    FirstHalf,
    HalfTime,
    SecondHalf,
    FullTime,
    GoalCelebration,
    Paused,
}

impl MatchPhase {
    pub const ALL: [MatchPhase; 7] = [
        MatchPhase::PreKickoff,
        MatchPhase::FirstHalf,
        MatchPhase::HalfTime,
        MatchPhase::SecondHalf,
        MatchPhase::FullTime,
        MatchPhase::GoalCelebration,
        MatchPhase::Paused,
    ];

    /// Ball in play and clock running.
    pub fn is_playing(&self) -> bool {
        matches!(self, MatchPhase::FirstHalf | MatchPhase::SecondHalf)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchPhase::FullTime)
    }

    /// Clock projection, `None` for celebration/pause.
    pub fn as_period(&self) -> Option<Period> {
        match self {
            MatchPhase::PreKickoff => Some(Period::PreKickoff),
            MatchPhase::FirstHalf => Some(Period::FirstHalf),
            MatchPhase::HalfTime => Some(Period::HalfTime),
            MatchPhase::SecondHalf => Some(Period::SecondHalf),
            MatchPhase::FullTime => Some(Period::FullTime),
            MatchPhase::GoalCelebration | MatchPhase::Paused => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchPhase::PreKickoff => "PreKickoff",
            MatchPhase::FirstHalf => "FirstHalf",
            MatchPhase::HalfTime => "HalfTime",
            MatchPhase::SecondHalf => "SecondHalf",
            MatchPhase::FullTime => "FullTime",
            MatchPhase::GoalCelebration => "GoalCelebration",
            MatchPhase::Paused => "Paused",
        }
    }
}

/// Clock period: the subset of `MatchPhase` the clock knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    PreKickoff,
    FirstHalf,
    HalfTime,
    SecondHalf,
    FullTime,
}

impl Period {
    pub fn is_running(&self) -> bool {
        matches!(self, Period::FirstHalf | Period::SecondHalf)
    }

    /// Period entered when the running half's time is up.
    pub fn on_expiry(&self) -> Option<Period> {
        match self {
            Period::FirstHalf => Some(Period::HalfTime),
            Period::SecondHalf => Some(Period::FullTime),
            Period::PreKickoff | Period::HalfTime | Period::FullTime => None,
        }
    }
}

impl From<Period> for MatchPhase {
    fn from(period: Period) -> Self {
        match period {
            Period::PreKickoff => MatchPhase::PreKickoff,
            Period::FirstHalf => MatchPhase::FirstHalf,
            Period::HalfTime => MatchPhase::HalfTime,
            Period::SecondHalf => MatchPhase::SecondHalf,
            Period::FullTime => MatchPhase::FullTime,
        }
    }
}

/// Outgoing edges of the phase table.
///
/// `Paused` has none: pause/resume is a snapshot side-channel, not an edge.
pub fn legal_targets(from: MatchPhase) -> &'static [MatchPhase] {
    match from {
        MatchPhase::PreKickoff => &[MatchPhase::FirstHalf],
        MatchPhase::FirstHalf => &[MatchPhase::HalfTime, MatchPhase::GoalCelebration],
        MatchPhase::HalfTime => &[MatchPhase::SecondHalf],
        MatchPhase::SecondHalf => &[MatchPhase::FullTime, MatchPhase::GoalCelebration],
        MatchPhase::GoalCelebration => &[MatchPhase::PreKickoff],
        MatchPhase::FullTime | MatchPhase::Paused => &[],
    }
}

pub fn is_legal_transition(from: MatchPhase, to: MatchPhase) -> bool {
    legal_targets(from).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regulation_flow_edges() {
        assert!(is_legal_transition(MatchPhase::PreKickoff, MatchPhase::FirstHalf));
        assert!(is_legal_transition(MatchPhase::FirstHalf, MatchPhase::HalfTime));
        assert!(is_legal_transition(MatchPhase::HalfTime, MatchPhase::SecondHalf));
        assert!(is_legal_transition(MatchPhase::SecondHalf, MatchPhase::FullTime));
    }

    #[test]
    fn test_goal_edges() {
        assert!(is_legal_transition(MatchPhase::FirstHalf, MatchPhase::GoalCelebration));
        assert!(is_legal_transition(MatchPhase::SecondHalf, MatchPhase::GoalCelebration));
        assert!(is_legal_transition(MatchPhase::GoalCelebration, MatchPhase::PreKickoff));
        assert!(!is_legal_transition(MatchPhase::HalfTime, MatchPhase::GoalCelebration));
    }

    #[test]
    fn test_full_time_is_terminal() {
        assert!(legal_targets(MatchPhase::FullTime).is_empty());
        assert!(MatchPhase::FullTime.is_terminal());
    }

    #[test]
    fn test_no_self_loops() {
        for phase in MatchPhase::ALL {
            assert!(!is_legal_transition(phase, phase), "{:?} loops", phase);
        }
    }

    #[test]
    fn test_period_projection_roundtrip() {
        for phase in MatchPhase::ALL {
            if let Some(period) = phase.as_period() {
                assert_eq!(MatchPhase::from(period), phase);
            }
        }
        assert_eq!(MatchPhase::Paused.as_period(), None);
        assert_eq!(MatchPhase::GoalCelebration.as_period(), None);
    }

    #[test]
    fn test_period_expiry() {
        assert_eq!(Period::FirstHalf.on_expiry(), Some(Period::HalfTime));
        assert_eq!(Period::SecondHalf.on_expiry(), Some(Period::FullTime));
        assert_eq!(Period::HalfTime.on_expiry(), None);
    }
}
