//! `rb-core` — foundational types for the `rust_robots` line simulator.
//!
//! This crate is a dependency of every other `rb-*` crate.  It has no `rb-*`
//! dependencies and no required external ones (only optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                  |
//! |--------------|-------------------------------------------|
//! | [`ids`]      | `AgentId`                                 |
//! | [`line`]     | `Position` on the 1-D integer line        |
//! | [`time`]     | `Tick`, `SimConfig`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod line;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::AgentId;
pub use line::Position;
pub use time::{DEFAULT_MAX_TICKS, SimConfig, Tick};
