//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time a
//! robot needs for one timed instruction (a move or a branch test); jumps are
//! resolved inside a tick and cost nothing.

use std::fmt;

/// Tick ceiling used when the caller does not pick one.
pub const DEFAULT_MAX_TICKS: u64 = 1_000;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Owned by the caller and handed to the simulation builder; nothing in the
/// workspace reads configuration from globals.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Safety ceiling.  A run that has not met after this many ticks ends as
    /// exhausted.
    pub max_ticks: u64,
}

impl SimConfig {
    pub fn with_max_ticks(max_ticks: u64) -> Self {
        Self { max_ticks }
    }

    /// The tick at which the simulation stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { max_ticks: DEFAULT_MAX_TICKS }
    }
}
