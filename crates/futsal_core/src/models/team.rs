use serde::{Deserialize, Serialize};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TeamSide {
    #[default]
    A,
    B,
}

impl TeamSide {
    /// The other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            TeamSide::A => TeamSide::B,
            TeamSide::B => TeamSide::A,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(TeamSide::A.opponent(), TeamSide::B);
        assert_eq!(TeamSide::B.opponent(), TeamSide::A);
        assert_eq!(TeamSide::A.opponent().opponent(), TeamSide::A);
    }

    #[test]
    fn test_default_is_a() {
        assert_eq!(TeamSide::default(), TeamSide::A);
    }
}
