/// Represents the team a piece belongs to.
///
/// The labeling is relative rather than absolute: `Ours` pawns advance up the
/// ranks (+1) and promote on rank 7, `Opponent` pawns advance down (-1) and
/// promote on rank 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Team {
    /// The side whose pawns move toward rank 7.
    Ours,
    /// The side whose pawns move toward rank 0.
    Opponent,
}

impl Team {
    /// The forward direction for this team's pawns.
    #[inline]
    pub const fn forward_direction(self) -> i8 {
        match self {
            Team::Ours => 1,
            Team::Opponent => -1,
        }
    }

    /// The rank this team's pawns start on (zero-indexed).
    #[inline]
    pub const fn start_rank(self) -> i8 {
        match self {
            Team::Ours => 1,
            Team::Opponent => 6,
        }
    }

    /// The last rank from this team's perspective, where pawns promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Team::Ours => 7,
            Team::Opponent => 0,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::Ours => Team::Opponent,
            Team::Opponent => Team::Ours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_derived_values() {
        assert_eq!(Team::Ours.forward_direction(), 1);
        assert_eq!(Team::Opponent.forward_direction(), -1);
        assert_eq!(Team::Ours.start_rank(), 1);
        assert_eq!(Team::Opponent.start_rank(), 6);
        assert_eq!(Team::Ours.promotion_rank(), 7);
        assert_eq!(Team::Opponent.promotion_rank(), 0);
        assert_eq!(Team::Ours.opposite(), Team::Opponent);
    }
}
