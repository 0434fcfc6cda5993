//! Result file: visited/cleaned cells, final pose and battery.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::command::RobotState;
use crate::core::engine::{Outcome, RunReport};
use crate::core::geometry::Position;
use crate::core::grid::Grid;
use crate::io::config::OutputConfig;
use crate::io::input::Pose;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "X")]
    pub x: i32,
    #[serde(rename = "Y")]
    pub y: i32,
}

impl From<Position> for Coordinate {
    fn from(position: Position) -> Self {
        Self {
            x: position.column,
            y: position.row,
        }
    }
}

/// Serialized run result. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub visited: Vec<Coordinate>,
    pub cleaned: Vec<Coordinate>,
    #[serde(rename = "final")]
    pub final_pose: Pose,
    pub battery: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl OutputFile {
    pub fn new(grid: &Grid, state: &RobotState) -> Self {
        Self {
            visited: coordinates(grid.visited_positions()),
            cleaned: coordinates(grid.cleaned_positions()),
            final_pose: Pose {
                x: state.position.column,
                y: state.position.row,
                facing: state.facing,
            },
            battery: state.battery,
            outcome: None,
        }
    }

    pub fn from_report(report: &RunReport, config: &OutputConfig) -> Self {
        let mut file = Self::new(&report.grid, &report.state);
        if config.include_outcome {
            file.outcome = Some(report.outcome);
        }
        file
    }

    pub fn render(&self, pretty: bool) -> Result<String> {
        let mut buf = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
        .context("serialize output json")?;
        buf.push('\n');
        Ok(buf)
    }
}

/// Write the run result to `path` (temp file + rename).
pub fn write_output(path: &Path, report: &RunReport, config: &OutputConfig) -> Result<()> {
    let file = OutputFile::from_report(report, config);
    debug!(
        path = %path.display(),
        visited = file.visited.len(),
        cleaned = file.cleaned.len(),
        "writing output"
    );
    let buf = file.render(config.pretty)?;
    write_atomic(path, &buf)
}

fn coordinates(positions: Vec<Position>) -> Vec<Coordinate> {
    positions.into_iter().map(Coordinate::from).collect()
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp output {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace output {}", path.display()))?;
    Ok(())
}
