//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutcomeRow, OutputResult, TickRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-tick row.
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()>;

    /// Write the terminal row.
    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
