//! Possession ownership - single source of truth for who has the ball.

use serde::{Deserialize, Serialize};

use crate::models::PlayerId;

/// `(previous, current)` owner notification. `None` = loose ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossessionChange {
    pub previous: Option<PlayerId>,
    pub current: Option<PlayerId>,
}

/// Enforces a single owner. Proximity ranking between several claimants is
/// the caller's job (see `select_claimant`).
#[derive(Debug, Clone, Default)]
pub struct PossessionArbiter {
    owner: Option<PlayerId>,
    changes: Vec<PossessionChange>,
}

impl PossessionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn is_loose(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_owned_by(&self, id: PlayerId) -> bool {
        self.owner == Some(id)
    }

    /// Change owner. Setting the current owner again is a silent no-op.
    ///
    /// The change is also queued; hosts that only read the return value
    /// must still call `drain_changes` (or `reset`) each tick.
    pub fn set_owner(&mut self, id: Option<PlayerId>) -> Option<PossessionChange> {
        if self.owner == id {
            return None;
        }
        let change = PossessionChange { previous: self.owner, current: id };
        self.owner = id;
        log::debug!("possession {:?} -> {:?}", change.previous, change.current);
        self.changes.push(change);
        Some(change)
    }

    /// Ball goes loose.
    pub fn release(&mut self) -> Option<PossessionChange> {
        self.set_owner(None)
    }

    /// Deliberate handoff (completed pass). Same rules as `set_owner`.
    pub fn transfer(&mut self, id: PlayerId) -> Option<PossessionChange> {
        self.set_owner(Some(id))
    }

    /// Loose ball within reach.
    pub fn can_claim(&self, distance_to_ball: f32, claim_radius: f32) -> bool {
        self.is_loose() && distance_to_ball <= claim_radius
    }

    /// `can_claim` + `set_owner` in one step.
    pub fn try_claim(
        &mut self,
        id: PlayerId,
        distance_to_ball: f32,
        claim_radius: f32,
    ) -> Option<PossessionChange> {
        if !self.can_claim(distance_to_ball, claim_radius) {
            return None;
        }
        self.set_owner(Some(id))
    }

    /// Notifications since the last drain, oldest first.
    ///
    /// The queue is unbounded until drained.
    pub fn drain_changes(&mut self) -> Vec<PossessionChange> {
        std::mem::take(&mut self.changes)
    }

    /// Loose ball, no queued notifications (match restart).
    pub fn reset(&mut self) {
        self.owner = None;
        self.changes.clear();
    }
}

/// Nearest candidate within `claim_radius`; lowest index wins ties.
///
/// `candidates` is `(player, distance_to_ball)` in roster order.
pub fn select_claimant(candidates: &[(PlayerId, f32)], claim_radius: f32) -> Option<PlayerId> {
    let mut best: Option<(PlayerId, f32)> = None;
    for &(id, distance) in candidates {
        if distance.is_nan() || distance > claim_radius {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((id, distance)),
        }
    }
    best.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_owner_notifies_once() {
        let mut arbiter = PossessionArbiter::new();
        let change = arbiter.set_owner(Some(7));
        assert_eq!(change, Some(PossessionChange { previous: None, current: Some(7) }));
        assert_eq!(arbiter.set_owner(Some(7)), None);
        assert_eq!(arbiter.drain_changes().len(), 1);
    }

    #[test]
    fn test_release_idempotent() {
        let mut arbiter = PossessionArbiter::new();
        assert_eq!(arbiter.release(), None);
        arbiter.set_owner(Some(3));
        assert_eq!(
            arbiter.release(),
            Some(PossessionChange { previous: Some(3), current: None })
        );
        assert_eq!(arbiter.release(), None);
        assert!(arbiter.is_loose());
        assert_eq!(arbiter.drain_changes().len(), 2);
    }

    #[test]
    fn test_transfer_between_players() {
        let mut arbiter = PossessionArbiter::new();
        arbiter.transfer(1);
        let change = arbiter.transfer(2).unwrap();
        assert_eq!(change.previous, Some(1));
        assert_eq!(change.current, Some(2));
        assert!(arbiter.is_owned_by(2));
        assert_eq!(arbiter.transfer(2), None);
    }

    #[test]
    fn test_can_claim_requires_loose_ball() {
        let mut arbiter = PossessionArbiter::new();
        assert!(arbiter.can_claim(0.8, 1.0));
        assert!(arbiter.can_claim(1.0, 1.0));
        assert!(!arbiter.can_claim(1.2, 1.0));
        arbiter.set_owner(Some(4));
        assert!(!arbiter.can_claim(0.1, 1.0));
    }

    #[test]
    fn test_can_claim_rejects_nan_distance() {
        let arbiter = PossessionArbiter::new();
        assert!(!arbiter.can_claim(f32::NAN, 1.0));
    }

    #[test]
    fn test_try_claim_on_owned_ball_is_noop() {
        let mut arbiter = PossessionArbiter::new();
        assert!(arbiter.try_claim(1, 0.5, 1.0).is_some());
        assert_eq!(arbiter.try_claim(2, 0.1, 1.0), None);
        assert!(arbiter.is_owned_by(1));
    }

    #[test]
    fn test_select_claimant_nearest_in_radius() {
        let candidates = [(10, 0.9), (11, 0.4), (12, 2.0), (13, 0.4)];
        assert_eq!(select_claimant(&candidates, 1.0), Some(11));
        assert_eq!(select_claimant(&[(10, 1.5)], 1.0), None);
        assert_eq!(select_claimant(&[], 1.0), None);
    }

    #[test]
    fn test_reset_drops_owner_and_queue() {
        let mut arbiter = PossessionArbiter::new();
        arbiter.set_owner(Some(2));
        arbiter.reset();
        assert!(arbiter.is_loose());
        assert!(arbiter.drain_changes().is_empty());
    }

    #[test]
    fn test_queue_accumulates_until_drained() {
        let mut arbiter = PossessionArbiter::new();
        // Host only reads return values
        for id in 1..=5 {
            assert!(arbiter.transfer(id).is_some());
        }
        let changes = arbiter.drain_changes();
        assert_eq!(changes.len(), 5);
        assert_eq!(changes[4], PossessionChange { previous: Some(4), current: Some(5) });
        assert!(arbiter.drain_changes().is_empty());
    }
}
