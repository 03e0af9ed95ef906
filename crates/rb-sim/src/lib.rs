//! `rb-sim` — tick loop driver for the rust_robots simulator.
//!
//! # Tick loop
//!
//! ```text
//! loop:
//!   ① Ceiling: tick == config.max_ticks      → Exhausted { ticks }
//!   ② Meeting: robot 1 and robot 2 share a cell → Met { tick, position }
//!   ③ Advance: robot 1, then robot 2, one timed instruction each
//!               (on Rayon with the `parallel` feature)
//!   ④ tick += 1, observer.on_tick({ tick, pos1, pos2 })
//! ```
//!
//! The meeting test runs before any instruction, so robots that start on the
//! same cell meet at tick 0.  Both end states are terminal.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the two `advance` calls of a tick via `rayon::join`. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rb_sim::{Scenario, TickLog};
//!
//! let mut sim = Scenario::converging_pair().build()?;
//! let mut log = TickLog::default();
//! let outcome = sim.run(&mut log)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod record;
pub mod scenario;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickLog};
pub use record::{Outcome, SimState, TickRecord};
pub use scenario::{RobotSpec, Scenario};
pub use sim::Sim;
