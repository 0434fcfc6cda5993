//! Up-front checks on the input and output paths given on the command line.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Result, anyhow};

/// Check that `input` is a readable file and `output` can be written.
///
/// A missing output file is created empty, since the only reliable way to
/// prove a path is writable is to open it for writing.
pub fn validate_paths(input: &Path, output: &Path) -> Result<()> {
    ensure_readable(input)?;
    ensure_writable(output)?;
    Ok(())
}

fn ensure_readable(path: &Path) -> Result<()> {
    if !path.is_file() || File::open(path).is_err() {
        return Err(anyhow!(
            "input is not an existing readable file: {}",
            path.display()
        ));
    }
    Ok(())
}

fn ensure_writable(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(anyhow!("output is not a writable path: {}", path.display()));
    }
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|_| anyhow!("output is not a writable path: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestWorkspace;

    #[test]
    fn accepts_existing_input_and_new_output() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("input.json", "{}").expect("write input");
        let output = workspace.path().join("output.json");

        validate_paths(&input, &output).expect("paths valid");
        assert!(output.exists());
    }

    #[test]
    fn keeps_existing_output_contents() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("input.json", "{}").expect("write input");
        let output = workspace.write("output.json", "previous").expect("write output");

        validate_paths(&input, &output).expect("paths valid");
        assert_eq!(workspace.read("output.json").expect("read"), "previous");
    }

    #[test]
    fn rejects_missing_input() {
        let workspace = TestWorkspace::new().expect("workspace");
        let err = validate_paths(
            &workspace.path().join("nonsense.json"),
            &workspace.path().join("output.json"),
        )
        .expect_err("missing input");
        assert!(
            err.to_string()
                .starts_with("input is not an existing readable file: ")
        );
    }

    #[test]
    fn rejects_directory_as_input() {
        let workspace = TestWorkspace::new().expect("workspace");
        let err = validate_paths(workspace.path(), &workspace.path().join("output.json"))
            .expect_err("directory input");
        assert!(err.to_string().contains("input is not an existing readable file"));
    }

    #[test]
    fn rejects_output_in_missing_directory() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("input.json", "{}").expect("write input");
        let output = workspace.path().join("nonsense").join("output.json");
        let err = validate_paths(&input, &output).expect_err("unwritable output");
        assert!(err.to_string().starts_with("output is not a writable path: "));
    }

    #[test]
    fn rejects_directory_as_output() {
        let workspace = TestWorkspace::new().expect("workspace");
        let input = workspace.write("input.json", "{}").expect("write input");
        let err = validate_paths(&input, workspace.path()).expect_err("directory output");
        assert!(err.to_string().contains("output is not a writable path"));
    }
}
