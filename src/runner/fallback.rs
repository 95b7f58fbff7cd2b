//! Placeholder artifact written when the bundler produced nothing.

use crate::error::{ErrorExt, Result};
use std::path::Path;

/// Fixed payload marking the bundle as a non-functional stand-in.
///
/// The preamble mirrors the prologue of a real production bundle so the
/// packaging pipeline accepts the file; the log line makes the substitution
/// visible at app startup.
pub const PLACEHOLDER_BUNDLE: &str = "var __DEV__=false,__BUNDLE_START_TIME__=Date.now(),process=this.process||{};process.env=process.env||{};process.env.NODE_ENV=\"production\";
console.log(\"QuickBill POS - Minimal Bundle\");
// This is a minimal bundle. The app may not function properly.
// Please rebuild with proper bundle.
";

/// Write the placeholder to `path`, overwriting whatever is there.
///
/// Returns the placeholder's size in bytes. This is the one write whose
/// failure is fatal: without it no artifact exists at all.
pub(crate) async fn write_placeholder(path: &Path) -> Result<u64> {
    tokio::fs::write(path, PLACEHOLDER_BUNDLE)
        .await
        .fs_context("writing placeholder bundle", path)?;
    Ok(PLACEHOLDER_BUNDLE.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_production_preamble_and_marker() {
        assert!(PLACEHOLDER_BUNDLE.starts_with("var __DEV__=false,__BUNDLE_START_TIME__="));
        assert!(PLACEHOLDER_BUNDLE.contains("NODE_ENV=\"production\""));
        assert!(PLACEHOLDER_BUNDLE.contains("console.log(\"QuickBill POS - Minimal Bundle\")"));
    }

    #[tokio::test]
    async fn write_placeholder_reports_payload_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.android.bundle");

        let size = write_placeholder(&path).await.unwrap();

        assert_eq!(size, PLACEHOLDER_BUNDLE.len() as u64);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), PLACEHOLDER_BUNDLE);
    }
}
