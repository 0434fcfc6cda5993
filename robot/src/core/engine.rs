//! Program execution: command selection, collision handling and outcome
//! classification.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::backoff::{Backoff, Escalation, STRATEGIES};
use crate::core::command::{Command, RobotState};
use crate::core::grid::Grid;

/// How a run ended. All three are normal results, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// No work left, or the battery reached exactly zero.
    Ok,
    /// A command would have driven the battery below zero.
    BatteryDead,
    /// A collision happened after every backoff strategy had been tried.
    Stuck,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Ok => "OK",
            Outcome::BatteryDead => "BATTERY_DEAD",
            Outcome::Stuck => "STUCK",
        };
        f.write_str(label)
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// Commands committed (main program and backoff).
    pub executed: u32,
    pub collisions: u32,
    pub strategies_started: u32,
}

/// Everything observable once a run has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub state: RobotState,
    pub grid: Grid,
    pub stats: RunStats,
}

enum Attempt {
    Committed,
    BatteryDead,
    Collision,
}

/// A cleaning robot bound to one room and one program.
///
/// The caller must ensure the initial position lies inside `grid`; every
/// later move is checked here.
#[derive(Debug, Clone)]
pub struct Robot {
    grid: Grid,
    program: VecDeque<Command>,
    state: RobotState,
    backoff: Backoff,
    stats: RunStats,
}

impl Robot {
    pub fn new<I>(grid: Grid, program: I, initial: RobotState) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self {
            grid,
            program: program.into_iter().collect(),
            state: initial,
            backoff: Backoff::Inactive,
            stats: RunStats::default(),
        }
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Main-program commands not yet started.
    pub fn pending_commands(&self) -> Vec<Command> {
        self.program.iter().copied().collect()
    }

    /// Run until the program is exhausted, the battery dies or the robot is stuck.
    pub fn run(&mut self) -> Outcome {
        debug!(state = ?self.state, commands = self.program.len(), "starting run");
        while self.has_work() && self.state.battery > 0 {
            let Some(command) = self.next_command() else {
                break;
            };
            match self.attempt(command) {
                Attempt::Committed => {
                    debug!(%command, "command executed");
                }
                Attempt::BatteryDead => {
                    info!(state = ?self.state, %command, "battery dead");
                    return Outcome::BatteryDead;
                }
                Attempt::Collision => {
                    self.stats.collisions += 1;
                    match self.backoff.escalate(&STRATEGIES) {
                        Escalation::Started(index) => {
                            self.stats.strategies_started += 1;
                            debug!(
                                %command,
                                strategy = STRATEGIES[index].name,
                                index,
                                "collision, starting backoff"
                            );
                        }
                        Escalation::Exhausted => {
                            info!(state = ?self.state, %command, "stuck, backoff strategies exhausted");
                            return Outcome::Stuck;
                        }
                    }
                }
            }
            debug!(state = ?self.state, "state");
        }
        info!(state = ?self.state, stats = ?self.stats, "run complete");
        Outcome::Ok
    }

    /// Run to completion and hand back the final grid and state.
    pub fn execute(mut self) -> RunReport {
        let outcome = self.run();
        RunReport {
            outcome,
            state: self.state,
            grid: self.grid,
            stats: self.stats,
        }
    }

    fn has_work(&self) -> bool {
        self.backoff.has_pending() || !self.program.is_empty()
    }

    /// Backoff commands take priority; resuming the main program ends recovery.
    fn next_command(&mut self) -> Option<Command> {
        if let Some(command) = self.backoff.next_command() {
            return Some(command);
        }
        self.backoff.reset();
        self.program.pop_front()
    }

    fn attempt(&mut self, command: Command) -> Attempt {
        let previous = self.state;
        let candidate = command.apply(previous);

        if candidate.battery < 0 {
            // The drained battery stays visible; only the pose is undone.
            self.state = RobotState {
                position: previous.position,
                facing: previous.facing,
                ..candidate
            };
            return Attempt::BatteryDead;
        }

        if !self.grid.is_passable(candidate.position) {
            self.state = RobotState {
                position: previous.position,
                ..candidate
            };
            return Attempt::Collision;
        }

        self.state = candidate;
        self.stats.executed += 1;
        self.grid.mark_visited(candidate.position);
        if command == Command::Clean {
            self.grid.mark_cleaned(candidate.position);
        }
        Attempt::Committed
    }
}
