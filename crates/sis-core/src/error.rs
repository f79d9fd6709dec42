//! Error taxonomy for the setup/runner flow. Every variant is terminal for
//! the current run; nothing here is retried.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    /// The import script is not where we expect it. Checked before any other
    /// side effect so a bad working directory aborts cleanly.
    #[error("import script not found: {0}")]
    ScriptMissing(PathBuf),

    /// A required configuration value was blank (or stdin hit EOF).
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A placeholder assignment did not occur exactly once in the script
    /// text, so a substitution would be ambiguous or silently dropped.
    #[error("placeholder {key} occurs {count} time(s) in the import script, expected exactly 1")]
    Placeholder { key: &'static str, count: usize },

    /// The dependency installer exited non-zero. Its own stderr is inherited,
    /// so the operator already saw the details.
    #[error("dependency install failed with {0}")]
    InstallFailed(ExitStatus),

    /// The import script itself exited non-zero.
    #[error("import failed with {0}")]
    ImportFailed(ExitStatus),
}
