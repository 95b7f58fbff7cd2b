//! Command line interface for the bundle runner.
//!
//! Parses arguments, runs the bounded bundler, and reports the outcome as
//! human-readable status lines.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::error::Result;
use crate::runner::{BuildOutcome, BundleRunner, Settings};
use std::time::Duration;

/// Main CLI entry point.
///
/// Returns the process exit code. Both outcomes map to 0: the bundle path
/// exists either way, and the distinction is reported on stdout. Callers
/// that need a stricter contract should use [`BundleRunner`] directly and
/// inspect the [`BuildOutcome`].
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    if let Err(reason) = args.validate() {
        OutputManager::new(false, false).error(&reason);
        return Ok(2);
    }

    run_with_args(args).await
}

/// Execute a parsed argument set.
pub async fn run_with_args(args: Args) -> Result<i32> {
    let output = OutputManager::new(args.verbose, args.quiet);

    let settings = Settings::builder()
        .timeout(Duration::from_secs(args.timeout))
        .bundle_output(&args.bundle_output)
        .reset_cache(args.reset_cache)
        .build();

    output.progress(&format!(
        "Starting bundle creation with {}-second timeout...",
        args.timeout
    ));
    output.verbose(&settings.command_line());

    match BundleRunner::new(settings).run().await? {
        BuildOutcome::Success { size } => {
            output.success(&format!(
                "Bundle created successfully: {:.2} MB",
                size as f64 / 1024.0 / 1024.0
            ));
        }
        BuildOutcome::Degraded { size } => {
            output.warn("Bundle was not created");
            output.println(&format!("Minimal fallback bundle written ({size} bytes)"));
        }
    }

    Ok(0)
}
