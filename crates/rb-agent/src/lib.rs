//! `rb-agent` — a robot on the line and its instruction interpreter.
//!
//! # One tick of one robot
//!
//! ```text
//! advance(marker):
//!   ① Resolve : follow jumps from the current line at zero cost until a
//!                timed instruction is under the counter.
//!   ② Execute : run exactly one timed instruction (move, branch, no-op).
//!   ③ Wrap    : a counter past the last line restarts at line 1.
//! ```
//!
//! The resolution phase gives up after `program.len()` hops: at that point a
//! line must have been visited twice, so the jumps form a cycle that would
//! never reach a timed instruction.  That case is reported as
//! [`AgentError::JumpCycle`].

pub mod agent;
pub mod error;
pub mod step;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use step::Step;
