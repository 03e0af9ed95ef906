//! Coordinates on the 1-D integer line.

use std::fmt;

/// A cell on the infinite integer line.
///
/// Robot positions and the marker cell share this type so the branch test in
/// `rb-agent` is a plain equality.  Moves use wrapping arithmetic: a robot
/// that walks past `i64::MIN` reappears at `i64::MAX` instead of panicking.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Position(pub i64);

impl Position {
    /// The cell one step to the left.
    #[inline]
    pub fn left(self) -> Position {
        Position(self.0.wrapping_sub(1))
    }

    /// The cell one step to the right.
    #[inline]
    pub fn right(self) -> Position {
        Position(self.0.wrapping_add(1))
    }

    /// Number of cells between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Position) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl From<i64> for Position {
    #[inline]
    fn from(v: i64) -> Self {
        Position(v)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
