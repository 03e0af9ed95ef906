//! The four-opcode robot instruction set.

use std::fmt;

/// Operand of a jump, resolved against the program length at decode time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jump {
    /// Valid target, stored as a 0-based instruction index.
    To(usize),
    /// Missing, non-numeric, or out-of-range target.  Executes as a jump to
    /// the next line.  Holds the raw operand text (empty when absent).
    FallThrough(String),
}

impl Jump {
    /// Decode a 1-based line operand for a program of `program_len` lines.
    pub fn decode(operand: Option<&str>, program_len: usize) -> Jump {
        let Some(raw) = operand else {
            return Jump::FallThrough(String::new());
        };
        match raw.parse::<usize>() {
            Ok(line) if (1..=program_len).contains(&line) => Jump::To(line - 1),
            _ => Jump::FallThrough(raw.to_owned()),
        }
    }
}

/// One decoded program line.
///
/// Moves and branches are *timed*: each costs the robot one tick.  Jumps are
/// resolved before the timed instruction of the same tick and cost nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `ML` / `MOVE_LEFT`: position − 1.
    MoveLeft,
    /// `MR` / `MOVE_RIGHT`: position + 1.
    MoveRight,
    /// `IF FLAG` / `BRANCH_IF_MARKER`: on the marker, continue with the next
    /// line; otherwise skip it.
    BranchIfMarker,
    /// `GOTO n` / `JUMP n`.
    Jump(Jump),
    /// Anything else.  Executes as a timed no-op.  Holds the normalized token.
    Unknown(String),
}

impl Instruction {
    /// Decode one source token.  Whitespace inside the token is collapsed, so
    /// `"  IF   FLAG "` decodes the same as `"IF FLAG"`.  Any first word
    /// starting with `GOTO` is a jump, so `GOTO5` and `GOTOX 2` decode as jumps.
    pub fn decode(token: &str, program_len: usize) -> Instruction {
        let words: Vec<&str> = token.split_whitespace().collect();
        match words.as_slice() {
            ["ML"] | ["MOVE_LEFT"] => Instruction::MoveLeft,
            ["MR"] | ["MOVE_RIGHT"] => Instruction::MoveRight,
            ["IF", "FLAG"] | ["BRANCH_IF_MARKER"] => Instruction::BranchIfMarker,
            // `GOTO` matches as a prefix: `GOTO5` has no operand and falls
            // through at zero cost.
            [head, rest @ ..] if *head == "JUMP" || head.starts_with("GOTO") => {
                Instruction::Jump(Jump::decode(rest.first().copied(), program_len))
            }
            _ => Instruction::Unknown(words.join(" ")),
        }
    }

    /// `true` for every instruction that consumes a tick.
    #[inline]
    pub fn is_timed(&self) -> bool {
        !matches!(self, Instruction::Jump(_))
    }

    /// Mnemonic without operand, for logs and step reports.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::MoveLeft       => "ML",
            Instruction::MoveRight      => "MR",
            Instruction::BranchIfMarker => "IF FLAG",
            Instruction::Jump(_)        => "GOTO",
            Instruction::Unknown(_)     => "?",
        }
    }
}

impl fmt::Display for Instruction {
    /// Canonical short form.  Decoding the output yields the same instruction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Jump(Jump::To(index)) => write!(f, "GOTO {}", index + 1),
            Instruction::Jump(Jump::FallThrough(raw)) if raw.is_empty() => f.write_str("GOTO"),
            Instruction::Jump(Jump::FallThrough(raw)) => write!(f, "GOTO {raw}"),
            Instruction::Unknown(token) => f.write_str(token),
            other => f.write_str(other.mnemonic()),
        }
    }
}
