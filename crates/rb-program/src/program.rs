//! `Program` — an immutable, non-empty sequence of decoded instructions.

use std::fmt;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::{Diagnostic, Instruction, Jump, ProgramError, ProgramResult};

/// One robot's control logic.
///
/// A program loops forever: there is no halt instruction, and running off
/// the last line restarts at line 1.  Robots hold programs behind an `Arc`
/// so the two robots of a run, and repeated runs, can share one decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Build a program from already-decoded instructions.
    ///
    /// Fails on an empty list, and on a `Jump::To` whose index does not name
    /// a line of this program.  Malformed jumps are expressed as
    /// `Jump::FallThrough`, never as an out-of-range `Jump::To`.
    pub fn new(instructions: Vec<Instruction>) -> ProgramResult<Self> {
        if instructions.is_empty() {
            return Err(ProgramError::Empty);
        }
        let len = instructions.len();
        for (i, instruction) in instructions.iter().enumerate() {
            if let Instruction::Jump(Jump::To(target)) = instruction {
                if *target >= len {
                    return Err(ProgramError::JumpTarget { line: i + 1, target: *target, len });
                }
            }
        }

        let program = Self { instructions };
        for diagnostic in program.diagnostics() {
            warn!(%diagnostic, "suspicious program line");
        }
        debug!(len, "program decoded");
        Ok(program)
    }

    /// Decode one token per instruction.  Tokens are numbered from 1 in
    /// iteration order; blank tokens are kept (as unknown no-ops).
    pub fn from_tokens<I, S>(tokens: I) -> ProgramResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Jump targets are validated against the full length, so collect first.
        let tokens: Vec<S> = tokens.into_iter().collect();
        let len = tokens.len();
        let instructions = tokens
            .iter()
            .map(|t| Instruction::decode(t.as_ref(), len))
            .collect();
        Self::new(instructions)
    }

    /// Decode program text: one instruction per line, blank lines skipped.
    pub fn parse(text: &str) -> ProgramResult<Self> {
        Self::from_tokens(text.lines().filter(|l| !l.trim().is_empty()))
    }

    /// Read and decode a program file.
    pub fn load(path: &Path) -> ProgramResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of instructions.  Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Malformed jumps and unknown tokens, in line order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.instructions
            .iter()
            .enumerate()
            .filter_map(|(i, instruction)| Diagnostic::for_instruction(i + 1, instruction))
            .collect()
    }

    /// `true` if at least one instruction consumes a tick.  A program without
    /// one can never complete an `advance`.
    pub fn has_timed_instruction(&self) -> bool {
        self.instructions.iter().any(Instruction::is_timed)
    }

    /// Numbered listing, one `"  n  INSTR"` row per line.
    pub fn listing(&self) -> String {
        use std::fmt::Write;
        let width = self.len().to_string().len();
        let mut out = String::new();
        for (i, instruction) in self.instructions.iter().enumerate() {
            let _ = writeln!(out, "{:>width$}  {instruction}", i + 1);
        }
        out
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    #[inline]
    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(s: &str) -> ProgramResult<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Program {
    /// Canonical source text, one instruction per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}
