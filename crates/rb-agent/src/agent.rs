//! The `Agent` struct and its interpreter.

use std::sync::Arc;

use rb_core::Position;
use rb_program::{Instruction, Jump, Program};
use tracing::trace;

use crate::{AgentError, AgentResult, Step};

/// A robot: a position on the line, a shared program, and a counter into it.
///
/// The counter is always a valid index into the program.  There is no halt:
/// stepping past the last line restarts at the first.
#[derive(Clone, Debug)]
pub struct Agent {
    position: Position,
    program:  Arc<Program>,
    counter:  usize,
}

impl Agent {
    /// Place a robot at `position`, about to run line 1 of `program`.
    pub fn new(position: Position, program: impl Into<Arc<Program>>) -> Self {
        Self {
            position,
            program: program.into(),
            counter: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// 0-based index of the next instruction.
    #[inline]
    pub fn counter(&self) -> usize {
        self.counter
    }

    #[inline]
    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }

    /// Execute one timed instruction, after following any jumps in front of
    /// it.  `marker` is the cell tested by `IF FLAG`.
    ///
    /// On [`AgentError::JumpCycle`] the position is unchanged and the counter
    /// is left on a line of the cycle.
    pub fn advance(&mut self, marker: Position) -> AgentResult<Step> {
        let hops = self.resolve_jumps()?;
        let at = self.counter;
        let executed = self.program[at].clone();

        match &executed {
            Instruction::MoveLeft => {
                self.position = self.position.left();
                self.counter += 1;
            }
            Instruction::MoveRight => {
                self.position = self.position.right();
                self.counter += 1;
            }
            Instruction::BranchIfMarker => {
                // On the marker, fall into the next line; otherwise skip it.
                self.counter += if self.position == marker { 1 } else { 2 };
            }
            Instruction::Unknown(_) => {
                self.counter += 1;
            }
            Instruction::Jump(_) => unreachable!("resolve_jumps stops on timed instructions"),
        }
        self.wrap();

        trace!(
            line = at + 1,
            op = executed.mnemonic(),
            hops,
            position = self.position.0,
            "agent advanced",
        );

        Ok(Step {
            executed,
            at,
            hops,
            counter:  self.counter,
            position: self.position,
        })
    }

    /// Follow jumps until the counter is on a timed instruction.  Returns the
    /// number of jumps taken.
    fn resolve_jumps(&mut self) -> AgentResult<usize> {
        let len = self.program.len();
        let mut hops = 0;

        while let Instruction::Jump(jump) = &self.program[self.counter] {
            // `len` hops visit `len + 1` lines, so some line repeated.
            if hops == len {
                return Err(AgentError::JumpCycle { counter: self.counter, hops });
            }
            hops += 1;
            self.counter = match jump {
                Jump::To(target) => *target,
                Jump::FallThrough(_) => self.counter + 1,
            };
            self.wrap();
        }
        Ok(hops)
    }

    #[inline]
    fn wrap(&mut self) {
        if self.counter >= self.program.len() {
            self.counter = 0;
        }
    }
}
