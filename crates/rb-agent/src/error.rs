use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// Jumps starting at `counter` loop without reaching a timed instruction.
    #[error("jump cycle at line {}: no timed instruction reached after {hops} jumps", .counter + 1)]
    JumpCycle {
        counter: usize,
        hops:    usize,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
