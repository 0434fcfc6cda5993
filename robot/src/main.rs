//! Cleaning robot simulator CLI.
//!
//! `robot run INPUT OUTPUT` loads the room map, start pose, battery and
//! program from INPUT, runs it, and writes visited/cleaned cells plus the
//! final pose to OUTPUT. The exit code reports how the run ended.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use robot::exit_codes;
use robot::io::config::{RobotConfig, load_config, write_config};
use robot::logging;
use robot::run::{exit_code, run_file, summary_line};

const DEFAULT_CONFIG: &str = "robot.toml";

#[derive(Parser)]
#[command(
    name = "robot",
    version,
    about = "Battery-powered cleaning robot simulator"
)]
struct Cli {
    /// Log engine decisions at debug level (`RUST_LOG` takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the program in INPUT and write the result to OUTPUT.
    Run {
        /// Readable JSON input file.
        input: PathBuf,
        /// Result file; created if missing.
        output: PathBuf,
    },
    /// Write a config file with default values.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap exits with 2 on usage errors, which is BATTERY_DEAD here.
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    logging::init(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Command::Run { input, output } => cmd_run(&input, &output, &cli.config),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_run(input: &Path, output: &Path, config_path: &Path) -> Result<i32> {
    let config = load_config(config_path)?;
    let report = run_file(input, output, &config)?;
    println!("{}", summary_line(&report));
    Ok(exit_code(&report, &config))
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        bail!(
            "config {} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    write_config(config_path, &RobotConfig::default())?;
    println!("init: config={}", config_path.display());
    Ok(exit_codes::OK)
}
