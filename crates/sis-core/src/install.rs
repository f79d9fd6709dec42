//! Dependency installation: `<interpreter> -m pip install -r <manifest>`.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::error::SetupError;

/// Run pip against the requirements manifest. Stdio is inherited so the
/// installer's own progress and errors reach the operator directly; a
/// missing manifest is pip's error to report, not ours.
pub fn install_requirements(interpreter: &str, manifest: &Path) -> Result<()> {
    tracing::info!("installing dependencies from {}", manifest.display());

    let status = Command::new(interpreter)
        .args(["-m", "pip", "install", "-r"])
        .arg(manifest)
        .status()
        .with_context(|| format!("failed to run {interpreter}"))?;

    if !status.success() {
        return Err(SetupError::InstallFailed(status).into());
    }
    tracing::debug!("dependency install finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_succeeds_when_installer_exits_zero() {
        // `true` ignores its arguments and exits 0.
        install_requirements("true", Path::new("requirements.txt")).unwrap();
    }

    #[test]
    fn install_fails_on_nonzero_exit() {
        let err = install_requirements("false", Path::new("requirements.txt")).unwrap_err();
        match err.downcast_ref::<SetupError>() {
            Some(SetupError::InstallFailed(status)) => assert!(!status.success()),
            other => panic!("expected InstallFailed, got {other:?}"),
        }
    }

    #[test]
    fn install_surfaces_missing_interpreter() {
        let err = install_requirements("sis-no-such-interpreter", Path::new("requirements.txt"))
            .unwrap_err();
        assert!(err.downcast_ref::<SetupError>().is_none());
        assert!(format!("{err:#}").contains("sis-no-such-interpreter"));
    }
}
