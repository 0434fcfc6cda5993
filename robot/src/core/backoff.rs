//! Collision recovery: a fixed table of escape manoeuvres and the state
//! tracking which one is in progress.
//!
//! The sequences are tried in table order. Their exact contents matter: when
//! every strategy collides the robot must end where it started.

use std::collections::VecDeque;

use crate::core::command::Command;

/// A named, fixed recovery sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub name: &'static str,
    pub commands: &'static [Command],
}

pub const STRATEGIES: [Strategy; 5] = [
    Strategy {
        name: "sidestep",
        commands: &[Command::TurnRight, Command::Advance, Command::TurnLeft],
    },
    Strategy {
        name: "swing-right",
        commands: &[Command::TurnRight, Command::Advance, Command::TurnRight],
    },
    Strategy {
        name: "swing-right-again",
        commands: &[Command::TurnRight, Command::Advance, Command::TurnRight],
    },
    Strategy {
        name: "reverse-out",
        commands: &[
            Command::TurnRight,
            Command::Retreat,
            Command::TurnRight,
            Command::Advance,
        ],
    },
    Strategy {
        name: "about-face",
        commands: &[Command::TurnLeft, Command::TurnLeft, Command::Advance],
    },
];

/// Recovery progress.
///
/// `Active` persists after its queue drains until the main program resumes,
/// so a collision on the final recovery command escalates instead of
/// starting over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Backoff {
    #[default]
    Inactive,
    Active {
        strategy: usize,
        remaining: VecDeque<Command>,
    },
}

/// Result of reacting to a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escalation {
    /// The strategy at this table index is now queued.
    Started(usize),
    /// Every strategy has been tried.
    Exhausted,
}

impl Backoff {
    /// Pop the next recovery command, if a sequence still has one queued.
    pub fn next_command(&mut self) -> Option<Command> {
        match self {
            Backoff::Active { remaining, .. } => remaining.pop_front(),
            Backoff::Inactive => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        matches!(self, Backoff::Active { remaining, .. } if !remaining.is_empty())
    }

    /// Index of the strategy currently in progress.
    pub fn strategy(&self) -> Option<usize> {
        match self {
            Backoff::Active { strategy, .. } => Some(*strategy),
            Backoff::Inactive => None,
        }
    }

    /// Called when the main program resumes.
    pub fn reset(&mut self) {
        *self = Backoff::Inactive;
    }

    /// Move to the next strategy in `table`, discarding any unfinished one.
    pub fn escalate(&mut self, table: &[Strategy]) -> Escalation {
        let next = match self.strategy() {
            Some(current) => current + 1,
            None => 0,
        };
        match table.get(next) {
            Some(strategy) => {
                *self = Backoff::Active {
                    strategy: next,
                    remaining: strategy.commands.iter().copied().collect(),
                };
                Escalation::Started(next)
            }
            None => {
                *self = Backoff::Inactive;
                Escalation::Exhausted
            }
        }
    }
}
