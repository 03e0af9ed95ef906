//! The `Sim` struct and its tick loop.

use rb_agent::{Agent, AgentResult, Step};
use rb_core::{AgentId, Position, SimConfig, Tick};
use tracing::{debug, trace};

use crate::{Outcome, SimError, SimObserver, SimResult, SimState, TickRecord};

/// Two robots on one line, stepping in lockstep until they share a cell or
/// the tick ceiling is reached.
///
/// Create via [`SimBuilder`][crate::SimBuilder] or
/// [`Scenario::build`][crate::Scenario::build].
#[derive(Clone, Debug)]
pub struct Sim {
    /// Run configuration (tick ceiling).
    pub config: SimConfig,

    /// The cell both robots test with `IF FLAG`.  Constant for the run.
    pub marker: Position,

    /// Ticks completed so far.
    tick: Tick,

    agents: [Agent; 2],

    /// Set once the run reaches a terminal state.
    outcome: Option<Outcome>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, marker: Position, agents: [Agent; 2]) -> Self {
        Self {
            config,
            marker,
            tick: Tick::ZERO,
            agents,
            outcome: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the robots meet or the ceiling is reached.
    ///
    /// Calls `on_start` first and `on_finish` last.  Running a sim that has
    /// already finished returns the stored outcome without any callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Outcome> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }

        observer.on_start(&self.record(), self.marker);
        loop {
            if let Some(outcome) = self.advance_tick(observer)? {
                observer.on_finish(&outcome);
                return Ok(outcome);
            }
        }
    }

    /// Perform one iteration of the tick loop and return the resulting state.
    ///
    /// Useful for tests and interactive stepping.  `on_finish` is called on
    /// the iteration that reaches a terminal state; later calls do nothing.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimState> {
        if self.outcome.is_none() {
            if let Some(outcome) = self.advance_tick(observer)? {
                observer.on_finish(&outcome);
            }
        }
        Ok(self.state())
    }

    #[inline]
    pub fn state(&self) -> SimState {
        SimState::from(self.outcome)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn agent(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    /// Current tick and both positions.
    pub fn record(&self) -> TickRecord {
        TickRecord {
            tick: self.tick,
            pos1: self.agents[0].position(),
            pos2: self.agents[1].position(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Check termination, then advance both robots by one tick.  Returns the
    /// outcome if the run ended instead.
    fn advance_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Outcome>> {
        if let Some(outcome) = self.check_terminal() {
            debug!(%outcome, "simulation finished");
            self.outcome = Some(outcome);
            return Ok(Some(outcome));
        }

        // Both robots advance on copies; a failed tick leaves the sim untouched,
        // so a later call reports the same error instead of moving one robot.
        let mut next = self.agents.clone();
        let (first, second) = Self::advance_agents(&mut next, self.marker);
        let first = first.map_err(|source| SimError::Agent { agent: AgentId::FIRST, source })?;
        let second = second.map_err(|source| SimError::Agent { agent: AgentId::SECOND, source })?;
        self.agents = next;

        self.tick = self.tick + 1;
        observer.on_agent_step(self.tick, AgentId::FIRST, &first);
        observer.on_agent_step(self.tick, AgentId::SECOND, &second);

        let record = self.record();
        trace!(tick = record.tick.0, pos1 = record.pos1.0, pos2 = record.pos2.0, "tick");
        observer.on_tick(&record);
        Ok(None)
    }

    /// The ceiling is tested first: it bounds the loop, so a run with
    /// `max_ticks == 0` never inspects positions, and a meeting produced by
    /// the last permitted tick is not reported.
    fn check_terminal(&self) -> Option<Outcome> {
        if self.tick >= self.config.end_tick() {
            return Some(Outcome::Exhausted { ticks: self.tick });
        }
        let (pos1, pos2) = (self.agents[0].position(), self.agents[1].position());
        if pos1 == pos2 {
            return Some(Outcome::Met { tick: self.tick, position: pos1 });
        }
        None
    }

    /// Advance robot 1, then robot 2.  The two share nothing mutable; the
    /// marker is copied into each call.
    fn advance_agents(
        agents: &mut [Agent; 2],
        marker: Position,
    ) -> (AgentResult<Step>, AgentResult<Step>) {
        let [first, second] = agents;

        #[cfg(not(feature = "parallel"))]
        {
            let a = first.advance(marker);
            let b = second.advance(marker);
            (a, b)
        }

        #[cfg(feature = "parallel")]
        {
            rayon::join(|| first.advance(marker), || second.advance(marker))
        }
    }
}
