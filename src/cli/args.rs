//! Command line argument parsing and validation.
//!
//! The tool is designed to "just work" from the repository root with no
//! arguments; the flags exist for slower machines and alternate layouts.

use crate::runner::{DEFAULT_BUNDLE_OUTPUT, DEFAULT_TIMEOUT};
use clap::Parser;
use std::path::PathBuf;

/// Bounded bundle runner for the QuickBill POS Android app
#[derive(Parser, Debug)]
#[command(
    name = "quickbill_bundler",
    version,
    about = "Run the React Native bundler under a wall-clock bound",
    long_about = "Runs the React Native bundler for Android, terminates it when the \
timeout expires, and writes a minimal placeholder bundle if no artifact was produced. \
The bundle path exists after every run.

Usage:
  quickbill_bundler
  quickbill_bundler --timeout 120
  quickbill_bundler --reset-cache --verbose"
)]
pub struct Args {
    /// Seconds to wait for the bundler before terminating it
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Where the bundle artifact is written
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BUNDLE_OUTPUT)]
    pub bundle_output: PathBuf,

    /// Clear the bundler's transform cache before building
    #[arg(long)]
    pub reset_cache: bool,

    /// Show the bundler command line and extra detail
    #[arg(long)]
    pub verbose: bool,

    /// Suppress status output (errors still print)
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be at least 1 second".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn defaults_match_standard_invocation() {
        let args = Args::try_parse_from(["quickbill_bundler"]).unwrap();

        assert_eq!(args.timeout, 30);
        assert_eq!(
            args.bundle_output,
            Path::new("android/app/src/main/assets/index.android.bundle")
        );
        assert!(!args.reset_cache);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let args = Args::try_parse_from(["quickbill_bundler", "--timeout", "0"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["quickbill_bundler", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "quickbill_bundler",
            "--timeout",
            "120",
            "--bundle-output",
            "/tmp/out/index.android.bundle",
            "--reset-cache",
        ])
        .unwrap();

        assert_eq!(args.timeout, 120);
        assert_eq!(args.bundle_output, Path::new("/tmp/out/index.android.bundle"));
        assert!(args.reset_cache);
    }
}
