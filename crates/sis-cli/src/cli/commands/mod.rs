//! CLI command handlers, one file per subcommand.
//!
//! Handlers take the resolved config plus a reader/writer pair so the full
//! interactive flows are testable without a terminal.

mod run;
mod setup;

pub use run::run_preconfigured;
pub use setup::run_setup;
