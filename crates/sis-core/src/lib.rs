pub mod config;
pub mod error;
pub mod install;
pub mod logging;
pub mod prompt;
pub mod runner;
pub mod script;
