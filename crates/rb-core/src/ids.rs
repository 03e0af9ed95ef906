//! Strongly typed agent identifier.

use std::fmt;

/// Index of a robot in the simulation.  A run always has exactly two:
/// [`AgentId::FIRST`] and [`AgentId::SECOND`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u8);

impl AgentId {
    pub const FIRST: AgentId = AgentId(0);
    pub const SECOND: AgentId = AgentId(1);

    /// Cast to `usize` for direct use as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based number used in human-facing output ("robot 1", "robot 2").
    #[inline]
    pub fn number(self) -> u16 {
        self.0 as u16 + 1
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}
