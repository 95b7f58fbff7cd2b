//! Build invocation configuration.
//!
//! A [`Settings`] value is the whole invocation: bundler program, the fixed
//! argument set, and the wall-clock bound. It is created once per run via
//! [`SettingsBuilder`] and never mutated afterward.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default wall-clock bound on the bundler.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default artifact location inside the Android project tree.
pub const DEFAULT_BUNDLE_OUTPUT: &str = "android/app/src/main/assets/index.android.bundle";

/// Default destination for bundled image assets.
pub const DEFAULT_ASSETS_DEST: &str = "android/app/src/main/res";

/// Default JavaScript entry point.
pub const DEFAULT_ENTRY_FILE: &str = "index.js";

/// Program used to launch the bundler.
const DEFAULT_BUNDLER_PROGRAM: &str = "npx";

/// A fixed bundler invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    bundler_program: String,
    timeout: Duration,
    bundle_output: PathBuf,
    assets_dest: PathBuf,
    entry_file: PathBuf,
    reset_cache: bool,
}

impl Settings {
    /// Start building settings from the defaults.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Program the bundler is launched through.
    pub fn bundler_program(&self) -> &str {
        &self.bundler_program
    }

    /// Wall-clock bound on the bundler.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Path the bundle artifact is expected at.
    pub fn bundle_output(&self) -> &Path {
        &self.bundle_output
    }

    /// The fixed argument set handed to the bundler program.
    ///
    /// Workers are capped at 1; multi-worker transforms are what hung on
    /// the constrained build machines this tool exists for.
    pub(crate) fn bundle_args(&self) -> Vec<String> {
        let mut args = vec![
            "react-native".to_string(),
            "bundle".to_string(),
            "--platform".to_string(),
            "android".to_string(),
            "--dev".to_string(),
            "false".to_string(),
            "--entry-file".to_string(),
            self.entry_file.display().to_string(),
            "--bundle-output".to_string(),
            self.bundle_output.display().to_string(),
            "--assets-dest".to_string(),
            self.assets_dest.display().to_string(),
        ];
        if self.reset_cache {
            args.push("--reset-cache".to_string());
        }
        args.push("--max-workers".to_string());
        args.push("1".to_string());
        args
    }

    /// Human-readable command line for diagnostics.
    pub(crate) fn command_line(&self) -> String {
        let mut parts = vec![self.bundler_program.clone()];
        parts.extend(self.bundle_args());
        parts.join(" ")
    }
}

/// Builder for [`Settings`].
///
/// Every field starts at the fixed default the original build used, so an
/// unconfigured `build()` reproduces the standard invocation.
#[derive(Debug)]
pub struct SettingsBuilder {
    bundler_program: String,
    timeout: Duration,
    bundle_output: PathBuf,
    assets_dest: PathBuf,
    entry_file: PathBuf,
    reset_cache: bool,
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            bundler_program: DEFAULT_BUNDLER_PROGRAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            bundle_output: DEFAULT_BUNDLE_OUTPUT.into(),
            assets_dest: DEFAULT_ASSETS_DEST.into(),
            entry_file: DEFAULT_ENTRY_FILE.into(),
            reset_cache: false,
        }
    }
}

impl SettingsBuilder {
    /// Create a builder with the default invocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the bundler executable.
    ///
    /// Lets tests and CI substitute a stub for the real bundler; the CLI
    /// does not expose this.
    pub fn bundler_program(mut self, program: impl Into<String>) -> Self {
        self.bundler_program = program.into();
        self
    }

    /// Bound on how long the bundler may run.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Where the bundle artifact is written.
    pub fn bundle_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.bundle_output = path.into();
        self
    }

    /// Where bundled image assets are written.
    pub fn assets_dest(mut self, path: impl Into<PathBuf>) -> Self {
        self.assets_dest = path.into();
        self
    }

    /// JavaScript entry point handed to the bundler.
    pub fn entry_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.entry_file = path.into();
        self
    }

    /// Clear the bundler's transform cache before building.
    pub fn reset_cache(mut self, reset: bool) -> Self {
        self.reset_cache = reset;
        self
    }

    /// Finalize the settings.
    pub fn build(self) -> Settings {
        Settings {
            bundler_program: self.bundler_program,
            timeout: self.timeout,
            bundle_output: self.bundle_output,
            assets_dest: self.assets_dest,
            entry_file: self.entry_file,
            reset_cache: self.reset_cache,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_invocation_matches_standard_build() {
        let settings = Settings::builder().build();

        assert_eq!(settings.bundler_program(), "npx");
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(
            settings.bundle_args(),
            vec![
                "react-native",
                "bundle",
                "--platform",
                "android",
                "--dev",
                "false",
                "--entry-file",
                "index.js",
                "--bundle-output",
                "android/app/src/main/assets/index.android.bundle",
                "--assets-dest",
                "android/app/src/main/res",
                "--max-workers",
                "1",
            ]
        );
    }

    #[test]
    fn reset_cache_adds_flag_before_worker_cap() {
        let args = Settings::builder().reset_cache(true).build().bundle_args();

        let reset = args.iter().position(|a| a == "--reset-cache").unwrap();
        let workers = args.iter().position(|a| a == "--max-workers").unwrap();
        assert!(reset < workers);
    }

    #[test]
    fn builder_overrides_replace_defaults() {
        let settings = Settings::builder()
            .bundler_program("/tmp/stub-bundler.sh")
            .timeout(Duration::from_secs(5))
            .bundle_output("/tmp/out/index.android.bundle")
            .build();

        assert_eq!(settings.bundler_program(), "/tmp/stub-bundler.sh");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(
            settings.bundle_output(),
            Path::new("/tmp/out/index.android.bundle")
        );
    }

    #[test]
    fn command_line_starts_with_program() {
        let line = Settings::builder().build().command_line();
        assert!(line.starts_with("npx react-native bundle"));
    }
}
