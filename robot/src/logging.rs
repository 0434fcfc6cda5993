//! Development-time tracing for the robot CLI.
//!
//! Diagnostics only: the result file and the stdout summary line are the
//! product output and do not depend on `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Without it, `verbose` selects `robot=debug`,
/// otherwise `warn`. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=robot::core=debug cargo run -- run input.json output.json
/// ```
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,robot=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
