//! Orchestration for `robot run`: validate paths, load input, execute the
//! program and write the result file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::engine::RunReport;
use crate::exit_codes;
use crate::io::config::RobotConfig;
use crate::io::input::load_input;
use crate::io::output::write_output;
use crate::io::paths::validate_paths;

/// Run the program described by `input` and write the result to `output`.
///
/// Battery exhaustion and getting stuck are reported through
/// [`RunReport::outcome`], not as errors.
pub fn run_file(input: &Path, output: &Path, config: &RobotConfig) -> Result<RunReport> {
    validate_paths(input, output)?;
    let setup = load_input(input)?;
    info!(
        input = %input.display(),
        start = %setup.start.position,
        facing = %setup.start.facing,
        battery = setup.start.battery,
        commands = setup.commands.len(),
        "starting program"
    );

    let report = setup.into_robot().execute();

    write_output(output, &report, &config.output)
        .with_context(|| format!("write output {}", output.display()))?;
    info!(output = %output.display(), outcome = ?report.outcome, "result written");
    Ok(report)
}

/// Process exit code for a finished run.
pub fn exit_code(report: &RunReport, config: &RobotConfig) -> i32 {
    if config.outcome_exit_codes {
        exit_codes::for_outcome(report.outcome)
    } else {
        exit_codes::OK
    }
}

/// One-line human summary printed by the CLI.
pub fn summary_line(report: &RunReport) -> String {
    format!(
        "run: outcome={} battery={} final={} facing={} visited={} cleaned={}",
        report.outcome,
        report.state.battery,
        report.state.position,
        report.state.facing,
        report.grid.visited_positions().len(),
        report.grid.cleaned_positions().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::Outcome;
    use crate::io::output::OutputFile;
    use crate::test_support::TestWorkspace;

    const STUCK_INPUT: &str = r#"{
        "map": [["C", "C", "C"], ["C", "S", "C"], ["C", "C", "C"]],
        "start": {"X": 1, "Y": 1, "facing": "E"},
        "commands": ["A", "A"],
        "battery": 1000
    }"#;

    #[test]
    fn runs_fixture_and_writes_output() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.fixture("valid_input.json").expect("fixture");
        let output = workspace.path().join("out.json");

        let report = run_file(&input, &output, &RobotConfig::default()).expect("run");
        assert_eq!(report.outcome, Outcome::Ok);
        assert_eq!(report.state.battery, 53);

        let written: OutputFile =
            serde_json::from_str(&workspace.read("out.json").expect("read")).expect("parse");
        assert_eq!(written.battery, 53);
        assert_eq!(written.cleaned.len(), 2);
        assert_eq!(written.outcome, None);
    }

    #[test]
    fn stuck_run_is_not_an_error() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("stuck.json", STUCK_INPUT).expect("write");
        let output = workspace.path().join("out.json");

        let report = run_file(&input, &output, &RobotConfig::default()).expect("run");
        assert_eq!(report.outcome, Outcome::Stuck);
        assert_eq!(exit_code(&report, &RobotConfig::default()), exit_codes::STUCK);

        let lenient = RobotConfig {
            outcome_exit_codes: false,
            ..RobotConfig::default()
        };
        assert_eq!(exit_code(&report, &lenient), exit_codes::OK);
    }

    #[test]
    fn invalid_input_leaves_no_result() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("bad.json", "{}").expect("write");
        let output = workspace.path().join("out.json");

        let err = run_file(&input, &output, &RobotConfig::default()).expect_err("bad input");
        assert!(format!("{err:#}").contains("input schema validation failed"));
        assert_eq!(workspace.read("out.json").expect("read"), "");
    }

    #[test]
    fn summary_mentions_outcome_and_pose() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("stuck.json", STUCK_INPUT).expect("write");
        let output = workspace.path().join("out.json");
        let report = run_file(&input, &output, &RobotConfig::default()).expect("run");

        let line = summary_line(&report);
        assert!(line.starts_with("run: outcome=STUCK battery="), "{line}");
        assert!(line.contains("final=(1, 1) facing="), "{line}");
    }
}
