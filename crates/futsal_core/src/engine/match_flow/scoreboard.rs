//! Per-team goal tally.

use serde::{Deserialize, Serialize};

use crate::models::TeamSide;

/// Notification produced by `Scoreboard::add_goal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    pub team: TeamSide,
    pub new_score: u32,
}

/// Scores only go up, one goal at a time, until `reset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    score_a: u32,
    score_b: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self, team: TeamSide) -> u32 {
        match team {
            TeamSide::A => self.score_a,
            TeamSide::B => self.score_b,
        }
    }

    /// (A, B)
    pub fn scores(&self) -> (u32, u32) {
        (self.score_a, self.score_b)
    }

    pub fn add_goal(&mut self, team: TeamSide) -> ScoreChange {
        let slot = match team {
            TeamSide::A => &mut self.score_a,
            TeamSide::B => &mut self.score_b,
        };
        *slot = slot.saturating_add(1);
        ScoreChange { team, new_score: *slot }
    }

    /// Leading side, `None` on a draw.
    pub fn leader(&self) -> Option<TeamSide> {
        match self.score_a.cmp(&self.score_b) {
            std::cmp::Ordering::Greater => Some(TeamSide::A),
            std::cmp::Ordering::Less => Some(TeamSide::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.score_a == self.score_b
    }

    pub fn reset(&mut self) {
        self.score_a = 0;
        self.score_b = 0;
    }
}
