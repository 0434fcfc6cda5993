//! Battery-powered cleaning robot simulator.
//!
//! A robot drives over a grid of open and blocked cells, executing a queued
//! program of turn/advance/retreat/clean commands until the program ends, the
//! battery runs out, or it gets stuck behind an obstacle. The architecture
//! keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic simulation (geometry, grid, commands,
//!   backoff recovery, the execution engine). No I/O.
//! - **[`io`]**: Input/output files, configuration and path checks.
//!
//! [`run`] wires the two together for the `robot run` command.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod run;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
