//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use rb_agent::Agent;
use rb_core::{Position, SimConfig};
use rb_program::Program;
use tracing::warn;

use crate::{Sim, SimError, SimResult};

/// Number of robots in every run.
pub const ROBOT_COUNT: usize = 2;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick ceiling
/// - marker cell: tested by `IF FLAG`
/// - exactly two robots, added in order with [`robot`](Self::robot) or
///   [`agent`](Self::agent)
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default(), Position(1))
///     .robot(Position(10), Program::from_tokens(["ML", "IF FLAG", "MR", "GOTO 1"])?)
///     .robot(Position(-15), Program::from_tokens(["MR", "IF FLAG", "ML", "GOTO 1"])?)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    marker: Position,
    robots: Vec<Agent>,
}

impl SimBuilder {
    /// Create a builder with the run configuration and the marker cell.
    pub fn new(config: SimConfig, marker: Position) -> Self {
        Self {
            config,
            marker,
            robots: Vec::with_capacity(ROBOT_COUNT),
        }
    }

    /// Add a robot at `position` running `program` from line 1.
    pub fn robot(self, position: Position, program: impl Into<Arc<Program>>) -> Self {
        self.agent(Agent::new(position, program))
    }

    /// Add an already-constructed robot.
    pub fn agent(mut self, agent: Agent) -> Self {
        self.robots.push(agent);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`] at tick 0.
    pub fn build(self) -> SimResult<Sim> {
        let agents: [Agent; ROBOT_COUNT] =
            self.robots
                .try_into()
                .map_err(|robots: Vec<Agent>| SimError::AgentCountMismatch {
                    expected: ROBOT_COUNT,
                    got:      robots.len(),
                    what:     "robot",
                })?;

        for (i, agent) in agents.iter().enumerate() {
            if !agent.program().has_timed_instruction() {
                warn!(robot = i + 1, "program has no timed instruction; the first tick will fail");
            }
        }

        Ok(Sim::new(self.config, self.marker, agents))
    }
}
