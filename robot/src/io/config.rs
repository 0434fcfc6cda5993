//! Robot CLI configuration (`robot.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// CLI configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RobotConfig {
    /// Exit with `BATTERY_DEAD`/`STUCK` codes. When false every finished run exits 0.
    pub outcome_exit_codes: bool,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the result JSON.
    pub pretty: bool,
    /// Append an `outcome` field to the result JSON.
    pub include_outcome: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_outcome: false,
        }
    }
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            outcome_exit_codes: true,
            output: OutputConfig::default(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `RobotConfig::default()`.
pub fn load_config(path: &Path) -> Result<RobotConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(RobotConfig::default());
    }
    if !path.is_file() {
        return Err(anyhow!("config path is not a file {}", path.display()));
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RobotConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    debug!(path = %path.display(), config = ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &RobotConfig) -> Result<()> {
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RobotConfig::default());
        assert!(cfg.outcome_exit_codes);
        assert!(cfg.output.pretty);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("robot.toml");
        fs::write(&path, "[output]\ninclude_outcome = true\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert!(cfg.output.include_outcome);
        assert!(cfg.output.pretty);
        assert!(cfg.outcome_exit_codes);
    }

    #[test]
    fn rejects_wrong_types() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("robot.toml");
        fs::write(&path, "outcome_exit_codes = \"yes\"\n").expect("write");
        let err = load_config(&path).expect_err("load should fail");
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested/robot.toml");
        let cfg = RobotConfig {
            outcome_exit_codes: false,
            output: OutputConfig {
                pretty: false,
                include_outcome: true,
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }
}
