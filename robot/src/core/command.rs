//! Robot pose/battery state and the five atomic commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::geometry::{Direction, Position};

/// Pose plus remaining battery. Commands never mutate a state; they return a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotState {
    pub position: Position,
    pub battery: i32,
    pub facing: Direction,
}

impl RobotState {
    pub fn new(position: Position, battery: i32, facing: Direction) -> Self {
        Self {
            position,
            battery,
            facing,
        }
    }
}

/// Program instruction. Serialized as the short code, also accepted by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "TL", alias = "turn-left")]
    TurnLeft,
    #[serde(rename = "TR", alias = "turn-right")]
    TurnRight,
    #[serde(rename = "A", alias = "advance")]
    Advance,
    #[serde(rename = "B", alias = "retreat")]
    Retreat,
    #[serde(rename = "C", alias = "clean")]
    Clean,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::TurnLeft,
        Command::TurnRight,
        Command::Advance,
        Command::Retreat,
        Command::Clean,
    ];

    /// Battery consumed by every attempt, whether or not the result is accepted.
    pub fn cost(self) -> i32 {
        match self {
            Command::TurnLeft | Command::TurnRight => 1,
            Command::Advance => 2,
            Command::Retreat => 3,
            Command::Clean => 5,
        }
    }

    /// Stable identifier, e.g. `turn-left`.
    pub fn name(self) -> &'static str {
        match self {
            Command::TurnLeft => "turn-left",
            Command::TurnRight => "turn-right",
            Command::Advance => "advance",
            Command::Retreat => "retreat",
            Command::Clean => "clean",
        }
    }

    /// Short code used in input files, e.g. `TL`.
    pub fn code(self) -> &'static str {
        match self {
            Command::TurnLeft => "TL",
            Command::TurnRight => "TR",
            Command::Advance => "A",
            Command::Retreat => "B",
            Command::Clean => "C",
        }
    }

    /// Candidate state after this command. Knows nothing about the grid.
    pub fn apply(self, state: RobotState) -> RobotState {
        let battery = state.battery - self.cost();
        match self {
            Command::TurnLeft => RobotState {
                facing: state.facing.previous(),
                battery,
                ..state
            },
            Command::TurnRight => RobotState {
                facing: state.facing.next(),
                battery,
                ..state
            },
            Command::Advance => RobotState {
                position: state.position + state.facing.offset(),
                battery,
                ..state
            },
            Command::Retreat => RobotState {
                position: state.position + state.facing.reverse_offset(),
                battery,
                ..state
            },
            Command::Clean => RobotState { battery, ..state },
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|command| command.code() == value || command.name() == value)
            .ok_or_else(|| format!("unknown command '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> RobotState {
        RobotState::new(Position::new(1, 1), 10, Direction::E)
    }

    fn facing(direction: Direction) -> RobotState {
        RobotState {
            facing: direction,
            ..start()
        }
    }

    #[test]
    fn turn_left_rotates_counter_clockwise() {
        assert_eq!(Command::TurnLeft.apply(facing(Direction::E)).facing, Direction::N);
        assert_eq!(Command::TurnLeft.apply(facing(Direction::N)).facing, Direction::W);
        assert_eq!(Command::TurnLeft.apply(facing(Direction::W)).facing, Direction::S);
        assert_eq!(Command::TurnLeft.apply(facing(Direction::S)).facing, Direction::E);
    }

    #[test]
    fn turn_right_rotates_clockwise() {
        assert_eq!(Command::TurnRight.apply(facing(Direction::S)).facing, Direction::W);
        assert_eq!(Command::TurnRight.apply(facing(Direction::W)).facing, Direction::N);
        assert_eq!(Command::TurnRight.apply(facing(Direction::N)).facing, Direction::E);
        assert_eq!(Command::TurnRight.apply(facing(Direction::E)).facing, Direction::S);
    }

    #[test]
    fn four_turns_restore_facing() {
        for command in [Command::TurnLeft, Command::TurnRight] {
            let end = (0..4).fold(start(), |state, _| command.apply(state));
            assert_eq!(end.facing, start().facing);
            assert_eq!(end.position, start().position);
            assert_eq!(end.battery, start().battery - 4);
        }
    }

    #[test]
    fn advance_moves_along_facing() {
        assert_eq!(Command::Advance.apply(facing(Direction::N)).position, Position::new(1, 0));
        assert_eq!(Command::Advance.apply(facing(Direction::S)).position, Position::new(1, 2));
        assert_eq!(Command::Advance.apply(facing(Direction::W)).position, Position::new(0, 1));
        assert_eq!(Command::Advance.apply(facing(Direction::E)).position, Position::new(2, 1));
    }

    #[test]
    fn retreat_moves_against_facing() {
        assert_eq!(Command::Retreat.apply(facing(Direction::N)).position, Position::new(1, 2));
        assert_eq!(Command::Retreat.apply(facing(Direction::S)).position, Position::new(1, 0));
        assert_eq!(Command::Retreat.apply(facing(Direction::W)).position, Position::new(2, 1));
        assert_eq!(Command::Retreat.apply(facing(Direction::E)).position, Position::new(0, 1));
    }

    #[test]
    fn moves_keep_facing() {
        assert_eq!(Command::Advance.apply(start()).facing, Direction::E);
        assert_eq!(Command::Retreat.apply(start()).facing, Direction::E);
    }

    #[test]
    fn advance_and_retreat_cancel_out() {
        let there_and_back = Command::Retreat.apply(Command::Advance.apply(start()));
        let back_and_there = Command::Advance.apply(Command::Retreat.apply(start()));
        for end in [there_and_back, back_and_there] {
            assert_eq!(end.position, start().position);
            assert_eq!(end.facing, start().facing);
            assert_eq!(end.battery, start().battery - 5);
        }
    }

    #[test]
    fn clean_keeps_pose() {
        let end = Command::Clean.apply(start());
        assert_eq!(end.position, start().position);
        assert_eq!(end.facing, start().facing);
    }

    #[test]
    fn every_command_charges_its_cost() {
        let expected = [1, 1, 2, 3, 5];
        for (command, cost) in Command::ALL.into_iter().zip(expected) {
            assert_eq!(command.apply(start()).battery, start().battery - cost);
        }
    }

    #[test]
    fn cost_is_charged_even_into_negative() {
        let low = RobotState {
            battery: 1,
            ..start()
        };
        assert_eq!(Command::Clean.apply(low).battery, -4);
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("TL".parse::<Command>(), Ok(Command::TurnLeft));
        assert_eq!("retreat".parse::<Command>(), Ok(Command::Retreat));
        assert!("WWW".parse::<Command>().is_err());
    }

    #[test]
    fn deserializes_codes_and_names() {
        let parsed: Vec<Command> =
            serde_json::from_str(r#"["TR", "advance", "B", "clean"]"#).expect("parse commands");
        assert_eq!(
            parsed,
            vec![
                Command::TurnRight,
                Command::Advance,
                Command::Retreat,
                Command::Clean
            ]
        );
        assert_eq!(
            serde_json::to_string(&Command::TurnLeft).expect("serialize"),
            "\"TL\""
        );
    }
}
