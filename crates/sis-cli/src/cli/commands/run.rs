//! `sis run` – run an already-configured import script.

use anyhow::Result;
use sis_core::config::SisConfig;
use sis_core::script::{redact_key, TargetScript};
use sis_core::{install, prompt, runner};
use std::io::{BufRead, Write};

const NOT_CONFIGURED: &str = "<not configured>";

/// Show what the script is currently configured with, install dependencies,
/// then run the import behind the confirmation gate.
pub fn run_preconfigured(
    cfg: &SisConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let script = TargetScript::new(cfg.script.clone());
    script.ensure_exists()?;

    let values = script.current_values()?;
    if !values.fully_configured() {
        tracing::warn!("import script still has placeholder values; run `sis setup` first");
    }

    writeln!(out, "Studio import")?;
    writeln!(
        out,
        "  CRM URL: {}",
        values.crm_url.as_deref().unwrap_or(NOT_CONFIGURED)
    )?;
    writeln!(
        out,
        "  Team ID: {}",
        values.team_id.as_deref().unwrap_or(NOT_CONFIGURED)
    )?;
    let key = match &values.crm_key {
        Some(key) => redact_key(key),
        None => NOT_CONFIGURED.to_string(),
    };
    writeln!(out, "  Key:     {key}")?;

    writeln!(out, "Installing dependencies...")?;
    install::install_requirements(&cfg.interpreter, &cfg.manifest)?;

    if !prompt::confirm(out, input, "\nProceed with the import? [y/N] ")? {
        writeln!(out, "Import cancelled.")?;
        return Ok(());
    }

    runner::run_import(&cfg.interpreter, script.path())?;
    writeln!(out, "Import finished.")?;
    Ok(())
}
