//! # QuickBill Bundler
//!
//! Timeout-bounded runner for the React Native bundler used by the
//! QuickBill POS Android app.
//!
//! The bundler occasionally hangs on constrained build machines, so this
//! crate runs it as a subprocess under a hard wall-clock bound and
//! guarantees that a bundle file exists at the expected path afterward.
//! When the bundler finishes in time the real artifact is reported; when it
//! fails or is cut off, a minimal placeholder bundle is written instead so
//! downstream packaging steps keep working.
//!
//! ## Features
//!
//! - **Hard deadline**: the bundler is terminated when the bound expires,
//!   with a graceful-termination grace period before force-kill
//! - **Artifact guarantee**: the bundle path exists after every run,
//!   real or placeholder
//! - **Explicit outcome**: [`BuildOutcome`] distinguishes a real bundle
//!   from the degraded placeholder so callers can decide what to do
//!
//! ## Usage
//!
//! ```bash
//! quickbill_bundler                     # bundle with the 30-second default
//! quickbill_bundler --timeout 120      # allow a slower machine more time
//! quickbill_bundler --reset-cache      # clear the transform cache first
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod runner;

// Re-export main types for public API
pub use cli::Args;
pub use error::{Error, ErrorExt, Result};
pub use runner::{BuildOutcome, BundleRunner, Settings, SettingsBuilder, PLACEHOLDER_BUNDLE};
