//! Integer grid coordinates and compass headings.

use std::fmt;
use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

/// A `(column, row)` coordinate. Validity is always relative to a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.column + other.column, self.row + other.row)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        Position::new(-self.column, -self.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Compass heading. Declaration order is the clockwise turning cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    E,
    S,
    W,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Heading after a quarter turn clockwise.
    pub fn next(self) -> Direction {
        match self {
            Direction::N => Direction::E,
            Direction::E => Direction::S,
            Direction::S => Direction::W,
            Direction::W => Direction::N,
        }
    }

    /// Heading after a quarter turn counter-clockwise.
    pub fn previous(self) -> Direction {
        match self {
            Direction::N => Direction::W,
            Direction::E => Direction::N,
            Direction::S => Direction::E,
            Direction::W => Direction::S,
        }
    }

    /// Unit displacement when moving forward. Rows grow southwards.
    pub fn offset(self) -> Position {
        match self {
            Direction::N => Position::new(0, -1),
            Direction::E => Position::new(1, 0),
            Direction::S => Position::new(0, 1),
            Direction::W => Position::new(-1, 0),
        }
    }

    pub fn reverse_offset(self) -> Position {
        -self.offset()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::N => "N",
            Direction::E => "E",
            Direction::S => "S",
            Direction::W => "W",
        };
        f.write_str(label)
    }
}
