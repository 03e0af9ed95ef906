use rb_agent::AgentError;
use rb_core::AgentId;
use rb_program::ProgramError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("{what} count {got} does not match the required {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("program error: {0}")]
    Program(#[from] ProgramError),

    #[error("robot {} failed: {source}", .agent.number())]
    Agent {
        agent:  AgentId,
        #[source]
        source: AgentError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
