//! Stable exit codes for the robot CLI.

use crate::core::engine::Outcome;

/// Command succeeded, or the program ran to completion.
pub const OK: i32 = 0;
/// Invalid arguments, config or input file, or an I/O failure.
pub const INVALID: i32 = 1;
/// The program stopped because a command needed more battery than was left.
pub const BATTERY_DEAD: i32 = 2;
/// The robot hit an obstacle it could not back off from.
pub const STUCK: i32 = 3;

pub fn for_outcome(outcome: Outcome) -> i32 {
    match outcome {
        Outcome::Ok => OK,
        Outcome::BatteryDead => BATTERY_DEAD,
        Outcome::Stuck => STUCK,
    }
}
