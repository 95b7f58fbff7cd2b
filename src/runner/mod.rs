//! Timeout-bounded execution of the React Native bundler.
//!
//! Spawns the bundler as a subprocess, waits up to the configured bound,
//! escalates terminate-then-kill when the bound expires, and guarantees the
//! bundle path exists afterward.
//!
//! # Integration
//!
//! ```no_run
//! use quickbill_bundler::runner::{BundleRunner, Settings};
//! use std::time::Duration;
//!
//! # async fn example() -> quickbill_bundler::Result<()> {
//! let settings = Settings::builder()
//!     .timeout(Duration::from_secs(120))
//!     .reset_cache(true)
//!     .build();
//!
//! let outcome = BundleRunner::new(settings).run().await?;
//! println!("bundle size: {} bytes", outcome.size());
//! # Ok(())
//! # }
//! ```

mod fallback;
mod settings;

// Public re-exports
pub use fallback::PLACEHOLDER_BUNDLE;
pub use settings::{
    Settings, SettingsBuilder, DEFAULT_ASSETS_DEST, DEFAULT_BUNDLE_OUTPUT, DEFAULT_ENTRY_FILE,
    DEFAULT_TIMEOUT,
};

use crate::error::{ErrorExt, Result};
use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};

/// Grace period between graceful termination and force-kill.
const KILL_GRACE: Duration = Duration::from_secs(2);

/// Outcome of a bundle run.
///
/// The bundle path exists on disk in both cases. `Degraded` means the
/// bundler produced nothing and the placeholder was substituted; the app
/// will start but not function until a real bundle replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The bundler wrote the artifact within the bound.
    Success {
        /// Artifact size in bytes.
        size: u64,
    },
    /// The placeholder stands in for the missing artifact.
    Degraded {
        /// Placeholder size in bytes.
        size: u64,
    },
}

impl BuildOutcome {
    /// Artifact size in bytes, real or placeholder.
    pub fn size(&self) -> u64 {
        match self {
            BuildOutcome::Success { size } | BuildOutcome::Degraded { size } => *size,
        }
    }

    /// Whether the placeholder stands in for the real bundle.
    pub fn is_degraded(&self) -> bool {
        matches!(self, BuildOutcome::Degraded { .. })
    }
}

/// Timeout-bounded bundle runner.
///
/// Owns the spawned bundler process for its entire lifetime; the process is
/// terminated or confirmed exited before [`run`](Self::run) returns.
#[derive(Debug)]
pub struct BundleRunner {
    settings: Settings,
}

impl BundleRunner {
    /// Create a runner for the given invocation settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the bundler once and guarantee an artifact exists afterward.
    ///
    /// Exactly one attempt at the external tool, then exactly one fallback
    /// write if the artifact is missing. The outcome is decided by artifact
    /// presence alone, not by the bundler's exit code. Errors are returned
    /// only when the filesystem refuses the artifact guarantee itself:
    /// creating the output directory or writing the placeholder.
    pub async fn run(&self) -> Result<BuildOutcome> {
        let output_path = self.settings.bundle_output();

        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .fs_context("creating bundle output directory", parent)?;
        }

        match self.spawn() {
            Ok(child) => self.wait_bounded(child).await,
            Err(error) => {
                // Missing executable is absorbed like any other tool failure.
                log::warn!(
                    "failed to launch {}: {error}",
                    self.settings.bundler_program()
                );
            }
        }

        match tokio::fs::metadata(output_path).await {
            Ok(meta) => Ok(BuildOutcome::Success { size: meta.len() }),
            Err(_) => {
                log::warn!(
                    "no bundle at {}, writing placeholder",
                    output_path.display()
                );
                let size = fallback::write_placeholder(output_path).await?;
                Ok(BuildOutcome::Degraded { size })
            }
        }
    }

    fn spawn(&self) -> io::Result<Child> {
        log::debug!("launching: {}", self.settings.command_line());

        let mut command = Command::new(self.settings.bundler_program());
        command
            .args(self.settings.bundle_args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command.spawn()
    }

    /// Wait for the bundler up to the configured bound, escalating to
    /// termination when the bound expires.
    async fn wait_bounded(&self, mut child: Child) {
        // Drain both pipes from background tasks so a full or hung pipe
        // cannot extend the timed wait.
        drain_to_log(child.stdout.take());
        drain_to_log(child.stderr.take());

        match tokio::time::timeout(self.settings.timeout(), child.wait()).await {
            Ok(Ok(status)) => {
                log::info!("bundler exited with {status}");
            }
            Ok(Err(error)) => {
                log::warn!("failed to wait on bundler: {error}");
            }
            Err(_elapsed) => {
                log::warn!(
                    "bundler still running after {} seconds, terminating",
                    self.settings.timeout().as_secs()
                );
                shutdown(&mut child).await;
            }
        }
    }
}

/// Terminate-then-kill escalation for a child that outlived its bound.
///
/// Graceful termination first (SIGTERM on Unix), then a fixed grace period,
/// then SIGKILL. A step that finds the process already gone is a no-op, not
/// an error.
async fn shutdown(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::{self, Signal};
        use nix::unistd::Pid;

        if let Some(pid) = child.id() {
            match signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
                Ok(()) => {
                    if let Ok(status) = tokio::time::timeout(KILL_GRACE, child.wait()).await {
                        log::debug!("bundler exited after SIGTERM: {status:?}");
                        return;
                    }
                    log::warn!(
                        "bundler ignored SIGTERM for {} seconds, force-killing",
                        KILL_GRACE.as_secs()
                    );
                }
                Err(error) => {
                    // Exited between the timed wait and here; nothing to signal.
                    log::debug!("SIGTERM skipped: {error}");
                }
            }
        }
    }

    match child.kill().await {
        Ok(()) => log::debug!("bundler force-killed"),
        Err(error) => {
            // Exited on its own; nothing left to release.
            log::debug!("force-kill skipped: {error}");
        }
    }
    // Reap so no zombie outlives the run.
    let _ = child.wait().await;
}

/// Forward a child stream to the diagnostic log, line by line.
fn drain_to_log<R>(stream: Option<R>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let Some(stream) = stream else {
        return;
    };
    tokio::spawn(async move {
        let mut lines = BufReader::new(stream).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            log::debug!("bundler: {line}");
        }
    });
}
