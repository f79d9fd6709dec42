//! `sis setup` – configure the import script interactively, then run it.

use anyhow::Result;
use sis_core::config::SisConfig;
use sis_core::script::{redact_key, ImportConfig, TargetScript};
use sis_core::{install, prompt, runner};
use std::io::{BufRead, Write};

/// Full setup flow: existence gate, dependency install, configuration
/// prompts, placeholder patch, confirmation, import run.
///
/// Ordering matters: the script check happens before any subprocess, and the
/// install happens before any prompt so a broken environment fails fast.
pub fn run_setup(cfg: &SisConfig, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let script = TargetScript::new(cfg.script.clone());
    script.ensure_exists()?;

    writeln!(out, "Studio import setup")?;
    writeln!(out, "Installing dependencies...")?;
    install::install_requirements(&cfg.interpreter, &cfg.manifest)?;

    writeln!(out)?;
    writeln!(out, "CRM configuration")?;
    writeln!(
        out,
        "In the CRM's Supabase project, Settings -> API has the URL and service_role key."
    )?;
    let crm_url = prompt::read_required(out, input, "Supabase CRM URL: ", "CRM URL")?;
    let crm_key = prompt::read_required(out, input, "Service role key: ", "service role key")?;
    writeln!(out, "The team ID is in the CRM database's 'teams' table.")?;
    let team_id = prompt::read_required(out, input, "Team ID (UUID): ", "team ID")?;

    let import_cfg = ImportConfig {
        crm_url,
        crm_key,
        team_id,
    };
    script.apply(&import_cfg)?;
    writeln!(out, "Import script configured.")?;

    writeln!(out)?;
    writeln!(out, "Summary")?;
    writeln!(out, "  CRM URL: {}", import_cfg.crm_url)?;
    writeln!(out, "  Team ID: {}", import_cfg.team_id)?;
    writeln!(out, "  Key:     {}", redact_key(&import_cfg.crm_key))?;

    if !prompt::confirm(out, input, "\nProceed with the import? [y/N] ")? {
        writeln!(out, "Import cancelled.")?;
        return Ok(());
    }

    runner::run_import(&cfg.interpreter, script.path())?;
    writeln!(out, "Import finished.")?;
    Ok(())
}
