//! Report of one `Agent::advance` call.

use rb_core::Position;
use rb_program::Instruction;

/// What a robot did during one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The timed instruction that consumed the tick.
    pub executed:  Instruction,
    /// Counter of the executed instruction (after jump resolution).
    pub at:        usize,
    /// Jumps followed before reaching `executed`.
    pub hops:      usize,
    /// Counter after the instruction, already wrapped.
    pub counter:   usize,
    /// Position after the instruction.
    pub position:  Position,
}
