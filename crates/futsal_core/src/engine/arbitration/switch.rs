//! Human-controlled player switching.
//!
//! A switch always targets the nearest *other* teammate, even when the
//! active player is closest to the ball. Staying on the current player only
//! happens as a fallback when nobody else is available.

use serde::{Deserialize, Serialize};

use crate::models::PitchPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchResult {
    pub previous: usize,
    pub new: usize,
    pub switch_occurred: bool,
}

#[inline]
fn distance_sq(a: PitchPos, b: PitchPos) -> f32 {
    let dx = a.0 - b.0;
    let dz = a.1 - b.1;
    dx * dx + dz * dz
}

fn nearest_by<F>(positions: &[PitchPos], ball: PitchPos, mut skip: F) -> Option<usize>
where
    F: FnMut(usize) -> bool,
{
    let mut best: Option<(usize, f32)> = None;
    for (i, &pos) in positions.iter().enumerate() {
        if skip(i) {
            continue;
        }
        let d = distance_sq(pos, ball);
        if d.is_nan() {
            continue;
        }
        // Strict less-than: first minimal entry wins ties
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the roster entry closest to the ball, lowest index on ties.
pub fn find_nearest(positions: &[PitchPos], ball: PitchPos) -> Option<usize> {
    nearest_by(positions, ball, |_| false)
}

/// Same scan skipping `exclude`. `None` when no other entry exists.
pub fn find_nearest_excluding(
    positions: &[PitchPos],
    ball: PitchPos,
    exclude: usize,
) -> Option<usize> {
    nearest_by(positions, ball, |i| i == exclude)
}

pub fn perform_switch(positions: &[PitchPos], ball: PitchPos, current: usize) -> SwitchResult {
    match find_nearest_excluding(positions, ball, current) {
        Some(candidate) => SwitchResult {
            previous: current,
            new: candidate,
            switch_occurred: candidate != current,
        },
        None => SwitchResult { previous: current, new: current, switch_occurred: false },
    }
}

/// Owns the active player index for one human controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchSelector {
    active_player_index: usize,
}

impl SwitchSelector {
    pub fn new(active_player_index: usize) -> Self {
        Self { active_player_index }
    }

    pub fn active_player_index(&self) -> usize {
        self.active_player_index
    }

    /// Force control onto a specific player (kickoff taker, restart).
    pub fn set_active(&mut self, index: usize) {
        self.active_player_index = index;
    }

    /// "Switch" button: move control to the nearest other teammate.
    pub fn request_switch(&mut self, positions: &[PitchPos], ball: PitchPos) -> SwitchResult {
        let result = perform_switch(positions, ball, self.active_player_index);
        if result.switch_occurred {
            log::debug!("switch control {} -> {}", result.previous, result.new);
        }
        self.active_player_index = result.new;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tie_break_lowest_index() {
        let positions = [(3.0, 0.0), (0.0, 3.0), (-3.0, 0.0)];
        assert_eq!(find_nearest(&positions, (0.0, 0.0)), Some(0));
    }

    #[test]
    fn test_find_nearest() {
        let positions = [(10.0, 0.0), (2.0, 1.0), (5.0, 5.0)];
        assert_eq!(find_nearest(&positions, (0.0, 0.0)), Some(1));
        assert_eq!(find_nearest(&[], (0.0, 0.0)), None);
    }

    #[test]
    fn test_excluding_skips_index() {
        let positions = [(10.0, 0.0), (2.0, 1.0), (5.0, 5.0)];
        assert_eq!(find_nearest_excluding(&positions, (0.0, 0.0), 1), Some(2));
    }

    #[test]
    fn test_excluding_single_player_roster() {
        assert_eq!(find_nearest_excluding(&[(1.0, 1.0)], (0.0, 0.0), 0), None);
    }

    #[test]
    fn test_excluding_tie_after_skip() {
        let positions = [(1.0, 0.0), (2.0, 0.0), (0.0, 2.0)];
        assert_eq!(find_nearest_excluding(&positions, (0.0, 0.0), 0), Some(1));
    }

    #[test]
    fn test_switch_never_stays_on_nearest_current() {
        // Current player (0) is on the ball, switch still moves away
        let positions = [(0.0, 0.0), (4.0, 0.0), (2.0, 0.0)];
        let result = perform_switch(&positions, (0.0, 0.0), 0);
        assert_eq!(result, SwitchResult { previous: 0, new: 2, switch_occurred: true });
    }

    #[test]
    fn test_switch_fallback_when_alone() {
        let result = perform_switch(&[(5.0, 5.0)], (0.0, 0.0), 0);
        assert_eq!(result, SwitchResult { previous: 0, new: 0, switch_occurred: false });
    }

    #[test]
    fn test_nan_positions_skipped() {
        let positions = [(f32::NAN, 0.0), (3.0, 0.0)];
        assert_eq!(find_nearest(&positions, (0.0, 0.0)), Some(1));
    }

    #[test]
    fn test_selector_tracks_active() {
        let positions = [(0.0, 0.0), (4.0, 0.0), (2.0, 0.0), (9.0, 9.0), (8.0, 0.0)];
        let mut selector = SwitchSelector::new(0);
        let first = selector.request_switch(&positions, (1.0, 0.0));
        assert_eq!(first.new, 2);
        assert_eq!(selector.active_player_index(), 2);

        let second = selector.request_switch(&positions, (1.0, 0.0));
        assert_eq!(second.previous, 2);
        assert_eq!(second.new, 0);

        selector.set_active(4);
        assert_eq!(selector.active_player_index(), 4);
    }
}
