//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `ticks.csv`:   `tick,pos1,pos2`, one row per tick
//! - `outcome.csv`: `met,tick,position`, one row per run

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutcomeRow, OutputResult, TickRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    outcome:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) the two CSV files, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record(["tick", "pos1", "pos2"])?;

        let mut outcome = Writer::from_path(dir.join("outcome.csv"))?;
        outcome.write_record(["met", "tick", "position"])?;

        Ok(Self {
            ticks,
            outcome,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick(&mut self, row: &TickRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.pos1.to_string(),
            row.pos2.to_string(),
        ])?;
        Ok(())
    }

    fn write_outcome(&mut self, row: &OutcomeRow) -> OutputResult<()> {
        self.outcome.write_record(&[
            (row.met as u8).to_string(),
            row.tick.to_string(),
            row.position.map(|p| p.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.outcome.flush()?;
        Ok(())
    }
}
