//! JSON scenario files.
//!
//! # Format
//!
//! ```json
//! {
//!   "marker": 1,
//!   "max_ticks": 1000,
//!   "robots": [
//!     { "position": 10,  "program": ["ML", "IF FLAG", "MR", "GOTO 1"] },
//!     { "position": -15, "program": ["MR", "IF FLAG", "ML", "GOTO 1"] }
//!   ]
//! }
//! ```
//!
//! `max_ticks` is optional and defaults to [`DEFAULT_MAX_TICKS`].  Program
//! tokens follow the `rb-program` source format; each array element is one
//! line, numbered from 1.

use std::io::Read;
use std::path::Path;

use rb_core::{DEFAULT_MAX_TICKS, Position, SimConfig};
use rb_program::Program;
use serde::{Deserialize, Serialize};

use crate::{Sim, SimBuilder, SimResult};

/// One robot: where it starts and what it runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub position: Position,
    pub program:  Vec<String>,
}

impl RobotSpec {
    pub fn new<I, S>(position: i64, program: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            position: Position(position),
            program:  program.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything needed to build a [`Sim`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub marker: Position,

    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,

    pub robots: Vec<RobotSpec>,
}

fn default_max_ticks() -> u64 {
    DEFAULT_MAX_TICKS
}

impl Scenario {
    /// Marker at 1, robot 1 at 10 walking left, robot 2 at −15 walking
    /// right.  Each robot parks around the marker once it finds it.
    pub fn converging_pair() -> Self {
        Self {
            marker:    Position(1),
            max_ticks: DEFAULT_MAX_TICKS,
            robots:    vec![
                RobotSpec::new(10, ["ML", "IF FLAG", "MR", "GOTO 1"]),
                RobotSpec::new(-15, ["MR", "IF FLAG", "ML", "GOTO 1"]),
            ],
        }
    }

    /// Load a scenario from a JSON file.
    pub fn load_json(path: &Path) -> SimResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// Like [`load_json`](Self::load_json) but accepts any `Read` source.
    pub fn from_json_reader<R: Read>(reader: R) -> SimResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn config(&self) -> SimConfig {
        SimConfig::with_max_ticks(self.max_ticks)
    }

    /// Decode both programs and build a sim at tick 0.
    pub fn build(&self) -> SimResult<Sim> {
        let mut builder = SimBuilder::new(self.config(), self.marker);
        for robot in &self.robots {
            builder = builder.robot(robot.position, Program::from_tokens(&robot.program)?);
        }
        builder.build()
    }
}
