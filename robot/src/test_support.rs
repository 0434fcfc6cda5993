//! Test-only helpers for building grids, programs and robots from short
//! string notations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::command::{Command, RobotState};
use crate::core::engine::Robot;
use crate::core::geometry::{Direction, Position};
use crate::core::grid::{Cell, CellKind, Grid};

/// Parse `"SCS,SSS"` into rows of cell kinds (`S` open, `C` blocked).
pub fn cell_kinds(map: &str) -> Vec<Vec<CellKind>> {
    map.split(',')
        .map(|row| row.chars().map(kind_from_char).collect())
        .collect()
}

/// Parse `"TL,A,B"` into commands. Accepts codes and names; empty input is an
/// empty program.
pub fn commands(program: &str) -> Vec<Command> {
    program
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().unwrap_or_else(|err| panic!("{err}")))
        .collect()
}

/// Parse cells with flags: rows split by `,`, cells by `|`.
///
/// Each cell is its kind followed by optional `+`/`-` for visited, then
/// cleaned: `"S++|C|S+"` is a visited+cleaned open cell, a blocked cell and a
/// visited open cell.
pub fn cells(map: &str) -> Vec<Vec<Cell>> {
    map.split(',')
        .map(|row| {
            row.split('|')
                .map(|token| {
                    let mut chars = token.chars();
                    let kind = kind_from_char(chars.next().expect("cell kind"));
                    let visited = chars.next() == Some('+');
                    let cleaned = chars.next() == Some('+');
                    Cell {
                        kind,
                        visited,
                        cleaned,
                    }
                })
                .collect()
        })
        .collect()
}

pub fn state(column: i32, row: i32, battery: i32, facing: Direction) -> RobotState {
    RobotState::new(Position::new(column, row), battery, facing)
}

/// Build a robot from the short notations above.
pub fn robot(map: &str, program: &str, initial: RobotState) -> Robot {
    Robot::new(Grid::from_kinds(cell_kinds(map)), commands(program), initial)
}

/// Temporary directory holding input/output files for one run.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.dir.path().join(name);
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }

    /// Copy a file from `tests/fixtures/` into the workspace.
    pub fn fixture(&self, name: &str) -> Result<PathBuf> {
        let source = fixture_path(name);
        let contents = fs::read_to_string(&source)
            .with_context(|| format!("read fixture {}", source.display()))?;
        self.write(name, &contents)
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn kind_from_char(ch: char) -> CellKind {
    match ch {
        'S' => CellKind::Open,
        'C' => CellKind::Blocked,
        other => panic!("unknown cell kind '{other}'"),
    }
}
