//! QuickBill Bundler - bounded bundle creation for the Android app.
//!
//! This binary wraps the React Native bundler in a wall-clock bound and
//! guarantees the bundle path exists afterward, substituting a placeholder
//! when the bundler fails or times out.

use quickbill_bundler::cli;
use quickbill_bundler::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Create output manager for error display (never quiet for fatal errors)
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));

            process::exit(1);
        }
    }
}
