//! The target import script: existence gate, placeholder substitution, and
//! read-back of the currently-configured values.
//!
//! The script ships with three placeholder assignments that the operator's
//! values get substituted into. Substitution is textual and verbatim; the
//! only validation on the values themselves is non-emptiness.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::SetupError;

struct Placeholder {
    key: &'static str,
    token: &'static str,
}

impl Placeholder {
    /// The exact assignment line fragment as shipped in the script.
    fn needle(&self) -> String {
        format!("{} = \"{}\"", self.key, self.token)
    }

    fn assignment(&self, value: &str) -> String {
        format!("{} = \"{}\"", self.key, value)
    }
}

const CRM_URL: Placeholder = Placeholder {
    key: "CRM_SUPABASE_URL",
    token: "SUA_URL_AQUI",
};
const CRM_KEY: Placeholder = Placeholder {
    key: "CRM_SUPABASE_KEY",
    token: "SUA_KEY_AQUI",
};
const TEAM_ID: Placeholder = Placeholder {
    key: "TARGET_TEAM_ID",
    token: "SEU_TEAM_ID_AQUI",
};

/// The three operator-supplied values substituted into the script.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Supabase project URL of the CRM database.
    pub crm_url: String,
    /// Service-role key for that project.
    pub crm_key: String,
    /// UUID of the destination team in the CRM.
    pub team_id: String,
}

impl ImportConfig {
    /// All three values are required; nothing beyond non-emptiness is checked.
    pub fn validate(&self) -> Result<(), SetupError> {
        for (value, field) in [
            (&self.crm_url, "CRM URL"),
            (&self.crm_key, "service role key"),
            (&self.team_id, "team ID"),
        ] {
            if value.trim().is_empty() {
                return Err(SetupError::EmptyField(field));
            }
        }
        Ok(())
    }
}

/// Values currently assigned in the script text. `None` means the assignment
/// line is missing or still holds its placeholder.
#[derive(Debug, Default)]
pub struct ScriptValues {
    pub crm_url: Option<String>,
    pub crm_key: Option<String>,
    pub team_id: Option<String>,
}

impl ScriptValues {
    pub fn fully_configured(&self) -> bool {
        self.crm_url.is_some() && self.crm_key.is_some() && self.team_id.is_some()
    }
}

/// Handle to the import script file.
#[derive(Debug, Clone)]
pub struct TargetScript {
    path: PathBuf,
}

impl TargetScript {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gate called before any other side effect of a subcommand.
    pub fn ensure_exists(&self) -> Result<(), SetupError> {
        if self.path.is_file() {
            Ok(())
        } else {
            Err(SetupError::ScriptMissing(self.path.clone()))
        }
    }

    /// Substitute the three placeholder assignments with the captured values.
    ///
    /// Each placeholder must occur exactly once; otherwise the file is left
    /// untouched and a [`SetupError::Placeholder`] is returned. The rewrite
    /// goes through a temp file in the script's directory plus rename, so a
    /// crash mid-write cannot leave a half-patched script.
    pub fn apply(&self, cfg: &ImportConfig) -> Result<()> {
        cfg.validate()?;

        let mut text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;

        for (ph, value) in [
            (&CRM_URL, &cfg.crm_url),
            (&CRM_KEY, &cfg.crm_key),
            (&TEAM_ID, &cfg.team_id),
        ] {
            let needle = ph.needle();
            let count = text.matches(&needle).count();
            if count != 1 {
                return Err(SetupError::Placeholder { key: ph.key, count }.into());
            }
            text = text.replacen(&needle, &ph.assignment(value), 1);
        }

        // Same directory as the script so the rename stays on one filesystem.
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
            .context("creating temp file for script rewrite")?;
        tmp.write_all(text.as_bytes())?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }

    /// Read back what the script is currently configured with.
    pub fn current_values(&self) -> Result<ScriptValues> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;

        Ok(ScriptValues {
            crm_url: extract(&text, &CRM_URL),
            crm_key: extract(&text, &CRM_KEY),
            team_id: extract(&text, &TEAM_ID),
        })
    }
}

/// Find `KEY = "value"` in the text; placeholder tokens count as unset.
fn extract(text: &str, ph: &Placeholder) -> Option<String> {
    text.lines().find_map(|line| {
        let value = parse_assignment(line, ph.key)?;
        if value == ph.token {
            None
        } else {
            Some(value.to_string())
        }
    })
}

fn parse_assignment<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix(key)?;
    let rest = rest.trim_start().strip_prefix('=')?;
    let rest = rest.trim_start().strip_prefix('"')?;
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Show at most the first 20 characters of a secret for summaries.
pub fn redact_key(key: &str) -> String {
    let shown: String = key.chars().take(20).collect();
    format!("{shown}...")
}
