//! I/O helpers for robot commands.

pub mod config;
pub mod input;
pub mod output;
pub mod paths;
