//! `rb-program` — the robot instruction set and program representation.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`instruction`] | `Instruction` enum, `Jump` operand, token decoding        |
//! | [`program`]     | `Program`: immutable, non-empty instruction sequence     |
//! | [`diagnostic`]  | `Diagnostic`: recoverable issues found while decoding    |
//! | [`error`]       | `ProgramError`, `ProgramResult<T>`                        |
//!
//! # Source format
//!
//! One instruction per line.  Blank lines are skipped and the remaining lines
//! are numbered from 1; jump targets refer to those numbers.
//!
//! ```text
//! ML            MOVE_LEFT
//! MR            MOVE_RIGHT
//! IF FLAG       BRANCH_IF_MARKER
//! GOTO 1        JUMP 1
//! ```
//!
//! Tokens are decoded once, at construction.  Malformed jumps and unknown
//! tokens are kept in the program (as a fall-through jump and a no-op) and
//! reported through [`Program::diagnostics`].

pub mod diagnostic;
pub mod error;
pub mod instruction;
pub mod program;


pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use error::{ProgramError, ProgramResult};
pub use instruction::{Instruction, Jump};
pub use program::Program;
