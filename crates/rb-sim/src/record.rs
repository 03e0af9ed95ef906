//! Records emitted by the tick loop.

use std::fmt;

use rb_core::{Position, Tick};
use serde::{Deserialize, Serialize};

/// Positions of both robots after a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: Tick,
    pub pos1: Position,
    pub pos2: Position,
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    /// Both robots stood on `position` at the start of `tick`.
    Met { tick: Tick, position: Position },
    /// The ceiling was reached without a meeting.
    Exhausted { ticks: Tick },
}

impl Outcome {
    #[inline]
    pub fn is_met(&self) -> bool {
        matches!(self, Outcome::Met { .. })
    }

    /// Ticks simulated before the run ended.
    #[inline]
    pub fn ticks(&self) -> Tick {
        match *self {
            Outcome::Met { tick, .. } => tick,
            Outcome::Exhausted { ticks } => ticks,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Met { tick, position } => {
                write!(f, "robots met at cell {position} after {} ticks", tick.0)
            }
            Outcome::Exhausted { ticks } => {
                write!(f, "robots did not meet within {} ticks", ticks.0)
            }
        }
    }
}

/// Phase of the run state machine.  `Met` and `Exhausted` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimState {
    Running,
    Met,
    Exhausted,
}

impl From<Option<Outcome>> for SimState {
    fn from(outcome: Option<Outcome>) -> Self {
        match outcome {
            None => SimState::Running,
            Some(Outcome::Met { .. }) => SimState::Met,
            Some(Outcome::Exhausted { .. }) => SimState::Exhausted,
        }
    }
}
