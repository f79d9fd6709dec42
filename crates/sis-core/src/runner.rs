//! Runs the import script as a child process and propagates its exit status.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::error::SetupError;

/// Invoke `<interpreter> <script>` with inherited stdio. No retries, no
/// timeout; a non-zero exit is [`SetupError::ImportFailed`].
pub fn run_import(interpreter: &str, script: &Path) -> Result<()> {
    tracing::info!("running import script {}", script.display());

    let status = Command::new(interpreter)
        .arg(script)
        .status()
        .with_context(|| format!("failed to run {interpreter}"))?;

    if !status.success() {
        return Err(SetupError::ImportFailed(status).into());
    }
    tracing::info!("import script finished");
    Ok(())
}
