//! Error types for bundle runner operations.
//!
//! The external bundler's own failures (non-zero exit, crash, timeout,
//! missing executable) never surface here: they are absorbed into the
//! degraded outcome. Only filesystem failures that prevent guaranteeing an
//! artifact at all reach this type.

use std::{io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the bundle runner.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// File system error with path context.
    ///
    /// Automatically includes the path that caused the error for better
    /// diagnostics. Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "writing placeholder bundle")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Generic I/O error.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for filesystem operations with automatic path context.
///
/// Wraps I/O errors with the path that caused them for better diagnostics.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the
    /// operation, e.g., "creating bundle output directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_carries_operation_and_path() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .fs_context("writing placeholder bundle", "assets/index.android.bundle")
            .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("writing placeholder bundle"));
        assert!(message.contains("assets/index.android.bundle"));
        assert!(message.contains("denied"));
    }
}
