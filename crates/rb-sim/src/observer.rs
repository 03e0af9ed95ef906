//! Simulation observer trait for progress reporting and data collection.

use rb_agent::Step;
use rb_core::{AgentId, Position, Tick};

use crate::{Outcome, TickRecord};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_tick(&mut self, r: &TickRecord) {
///         println!("{:>4}: {} {}", r.tick.0, r.pos1, r.pos2);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once when `run` starts, with the positions the run starts from.
    fn on_start(&mut self, _initial: &TickRecord, _marker: Position) {}

    /// Called for each robot after it executed its timed instruction.  `tick`
    /// is the tick the instruction completed.
    fn on_agent_step(&mut self, _tick: Tick, _agent: AgentId, _step: &Step) {}

    /// Called after both robots moved and the tick counter advanced.
    fn on_tick(&mut self, _record: &TickRecord) {}

    /// Called once when the run reaches a terminal state.
    fn on_finish(&mut self, _outcome: &Outcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every tick record and the outcome in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickLog {
    pub records: Vec<TickRecord>,
    pub outcome: Option<Outcome>,
}

impl SimObserver for TickLog {
    fn on_tick(&mut self, record: &TickRecord) {
        self.records.push(*record);
    }

    fn on_finish(&mut self, outcome: &Outcome) {
        self.outcome = Some(*outcome);
    }
}
