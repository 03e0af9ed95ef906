//! Plain data row types written by output backends.

use rb_sim::{Outcome, TickRecord};

/// Both robot positions after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRow {
    pub tick: u64,
    pub pos1: i64,
    pub pos2: i64,
}

impl From<&TickRecord> for TickRow {
    fn from(r: &TickRecord) -> Self {
        Self { tick: r.tick.0, pos1: r.pos1.0, pos2: r.pos2.0 }
    }
}

/// The terminal record of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeRow {
    pub met:      bool,
    /// Meeting tick, or the number of ticks exhausted.
    pub tick:     u64,
    /// Meeting cell; `None` when the robots never met.
    pub position: Option<i64>,
}

impl From<&Outcome> for OutcomeRow {
    fn from(o: &Outcome) -> Self {
        match *o {
            Outcome::Met { tick, position } => Self {
                met:      true,
                tick:     tick.0,
                position: Some(position.0),
            },
            Outcome::Exhausted { ticks } => Self {
                met:      false,
                tick:     ticks.0,
                position: None,
            },
        }
    }
}
