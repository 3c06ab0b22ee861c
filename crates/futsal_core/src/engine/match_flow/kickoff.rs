//! Which team kicks off next.

use serde::{Deserialize, Serialize};

use crate::models::{PitchPos, TeamSide};

/// Kickoffs always restart from the centre spot.
pub const BALL_CENTER: PitchPos = (0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickoffAssignment {
    kicking_team: TeamSide,
    /// Team that kicked off the first half; the other one opens the second.
    first_half_team: TeamSide,
}

impl KickoffAssignment {
    pub fn new(initial: TeamSide) -> Self {
        Self { kicking_team: initial, first_half_team: initial }
    }

    pub fn kicking_team(&self) -> TeamSide {
        self.kicking_team
    }

    /// The conceding side restarts.
    pub fn on_goal_scored(&mut self, scoring_team: TeamSide) -> TeamSide {
        self.kicking_team = scoring_team.opponent();
        self.kicking_team
    }

    pub fn on_second_half(&mut self) -> TeamSide {
        self.kicking_team = self.first_half_team.opponent();
        self.kicking_team
    }

    pub fn ball_center(&self) -> PitchPos {
        BALL_CENTER
    }

    pub fn reset(&mut self) {
        self.kicking_team = self.first_half_team;
    }
}

impl Default for KickoffAssignment {
    fn default() -> Self {
        Self::new(TeamSide::A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_alternation() {
        let mut kickoff = KickoffAssignment::default();
        assert_eq!(kickoff.kicking_team(), TeamSide::A);
        assert_eq!(kickoff.on_goal_scored(TeamSide::A), TeamSide::B);
        assert_eq!(kickoff.on_goal_scored(TeamSide::B), TeamSide::A);
    }

    #[test]
    fn test_same_team_scoring_twice_keeps_other_kicking() {
        let mut kickoff = KickoffAssignment::new(TeamSide::B);
        kickoff.on_goal_scored(TeamSide::A);
        kickoff.on_goal_scored(TeamSide::A);
        assert_eq!(kickoff.kicking_team(), TeamSide::B);
    }

    #[test]
    fn test_second_half_goes_to_other_team() {
        let mut kickoff = KickoffAssignment::new(TeamSide::A);
        // Late first-half goal by B leaves A kicking, second half still goes to B
        kickoff.on_goal_scored(TeamSide::B);
        assert_eq!(kickoff.on_second_half(), TeamSide::B);
    }

    #[test]
    fn test_ball_center_is_origin() {
        assert_eq!(KickoffAssignment::default().ball_center(), (0.0, 0.0));
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut kickoff = KickoffAssignment::new(TeamSide::B);
        kickoff.on_goal_scored(TeamSide::B);
        kickoff.reset();
        assert_eq!(kickoff.kicking_team(), TeamSide::B);
    }
}
