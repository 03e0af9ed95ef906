use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("program has no instructions")]
    Empty,

    #[error("line {line}: jump to instruction index {target} is outside a {len}-line program")]
    JumpTarget {
        line:   usize,
        target: usize,
        len:    usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProgramResult<T> = Result<T, ProgramError>;
