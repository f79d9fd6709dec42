//! CLI for the SIS studio import setup/runner.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sis_core::config::{self, SisConfig};
use std::path::PathBuf;

use commands::{run_preconfigured, run_setup};

/// Top-level CLI for the studio CRM import tool.
#[derive(Debug, Parser)]
#[command(name = "sis")]
#[command(about = "SIS: interactive setup and runner for the studio CRM import", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Per-invocation overrides of the config file.
#[derive(Debug, Args)]
pub struct Overrides {
    /// Path to the import script.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Path to the pip requirements manifest.
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Interpreter used for pip and the import script.
    #[arg(long)]
    pub interpreter: Option<String>,
}

impl Overrides {
    fn apply(self, cfg: &mut SisConfig) {
        if let Some(script) = self.script {
            cfg.script = script;
        }
        if let Some(manifest) = self.manifest {
            cfg.manifest = manifest;
        }
        if let Some(interpreter) = self.interpreter {
            cfg.interpreter = interpreter;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Configure the import script interactively, then run it.
    Setup {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Run an already-configured import script.
    Run {
        #[command(flatten)]
        overrides: Overrides,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut out = std::io::stdout();

        match cli.command {
            CliCommand::Setup { overrides } => {
                overrides.apply(&mut cfg);
                run_setup(&cfg, &mut input, &mut out)?;
            }
            CliCommand::Run { overrides } => {
                overrides.apply(&mut cfg);
                run_preconfigured(&cfg, &mut input, &mut out)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
