//! Recoverable issues detected while decoding a program.

use std::fmt;

use crate::{Instruction, Jump};

/// What is wrong with a line.  Neither kind stops a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Jump without a usable target; executes as a jump to the next line.
    MalformedJump { operand: String },
    /// Unrecognized token; executes as a timed no-op.
    UnknownInstruction { token: String },
}

/// A [`DiagnosticKind`] attached to a 1-based source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Inspect one decoded instruction.  Returns `None` for well-formed lines.
    pub(crate) fn for_instruction(line: usize, instruction: &Instruction) -> Option<Diagnostic> {
        let kind = match instruction {
            Instruction::Jump(Jump::FallThrough(operand)) => DiagnosticKind::MalformedJump {
                operand: operand.clone(),
            },
            Instruction::Unknown(token) => DiagnosticKind::UnknownInstruction {
                token: token.clone(),
            },
            _ => return None,
        };
        Some(Diagnostic { line, kind })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::MalformedJump { operand } if operand.is_empty() => {
                write!(f, "line {}: jump has no target, falls through", self.line)
            }
            DiagnosticKind::MalformedJump { operand } => {
                write!(f, "line {}: jump target {operand:?} is not a line of this program, falls through", self.line)
            }
            DiagnosticKind::UnknownInstruction { token } => {
                write!(f, "line {}: unknown instruction {token:?}, treated as no-op", self.line)
            }
        }
    }
}
