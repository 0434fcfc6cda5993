//! Input file loading with schema + vocabulary validation.
//!
//! Structure is checked against the embedded JSON Schema first; command and
//! heading names are checked by serde; cell types and the start position are
//! checked while building the [`RobotSetup`].

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::command::{Command, RobotState};
use crate::core::engine::Robot;
use crate::core::geometry::{Direction, Position};
use crate::core::grid::{CellKind, Grid};

const INPUT_SCHEMA: &str = include_str!("../../schemas/input/v1.schema.json");

/// Raw input document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InputFile {
    /// Rows of `"S"`, `"C"`, `"null"` or `null`.
    pub map: Vec<Vec<Option<String>>>,
    pub start: Pose,
    pub commands: Vec<Command>,
    pub battery: i32,
}

/// Position plus heading as it appears on the wire (`X` column, `Y` row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
    pub facing: Direction,
}

impl Pose {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Validated inputs, ready to build an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotSetup {
    pub grid: Grid,
    pub start: RobotState,
    pub commands: Vec<Command>,
}

impl RobotSetup {
    pub fn into_robot(self) -> Robot {
        Robot::new(self.grid, self.commands, self.start)
    }
}

/// Load and validate an input file.
pub fn load_input(path: &Path) -> Result<RobotSetup> {
    debug!(path = %path.display(), "loading input");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))?;
    let setup = parse_input(&contents).with_context(|| format!("load input {}", path.display()))?;
    debug!(
        rows = setup.grid.row_count(),
        commands = setup.commands.len(),
        battery = setup.start.battery,
        "input loaded"
    );
    Ok(setup)
}

/// Validate and convert an input document held in memory.
pub fn parse_input(contents: &str) -> Result<RobotSetup> {
    let value: Value = serde_json::from_str(contents).context("parse input json")?;
    validate_schema(&value)?;
    let input: InputFile = serde_json::from_value(value).context("deserialize input")?;
    input.into_setup()
}

impl InputFile {
    pub fn into_setup(self) -> Result<RobotSetup> {
        let kinds = self
            .map
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell_kind(cell.as_deref()))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        let grid = Grid::from_kinds(kinds);

        let position = self.start.position();
        if !grid.contains(position) {
            bail!("initial robot position out of bounds: {position}");
        }

        Ok(RobotSetup {
            grid,
            start: RobotState::new(position, self.battery, self.start.facing),
            commands: self.commands,
        })
    }
}

fn cell_kind(value: Option<&str>) -> Result<CellKind> {
    match value {
        Some("S") => Ok(CellKind::Open),
        Some("C" | "null") | None => Ok(CellKind::Blocked),
        Some(other) => Err(anyhow!("unknown cell type in map: {other}")),
    }
}

fn validate_schema(instance: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(INPUT_SCHEMA).context("parse input schema")?;
    let validator =
        jsonschema::validator_for(&schema).map_err(|err| anyhow!("invalid input schema: {}", err))?;
    let messages = validator
        .iter_errors(instance)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        bail!("input schema validation failed: {}", messages.join("; "));
    }
    Ok(())
}
