//! framewright core
//!
//! Shared plumbing for the framewright toolkit:
//! - [`process`]: the synchronous command runner, the registry of live child
//!   processes, and the Ctrl-C handler that terminates them
//! - [`fs`]: directory creation, moves, copies, symlinks and scoped
//!   working-directory changes
//! - [`config`]: `framewright.toml` / `framewright.yaml` loading and validation

pub mod config;
pub mod error;
pub mod fs;
pub mod process;

pub use config::Config;
pub use error::{ConfigError, Error, Result};
pub use process::{
    install_cancellation_handler, CommandRunner, ProcessSupervisor, RunOptions, RunOutput, Stdin,
    Stream,
};
