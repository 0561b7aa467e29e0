//! Universal command - merge per-architecture binaries

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use framewright_apple::merge_universal;

use crate::cli::output;
use crate::cli::{Cli, Session};

/// Merge per-architecture binaries into one universal binary
#[derive(Debug, Args)]
pub struct UniversalCommand {
    /// Merged binary to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Single-architecture input binaries
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

impl UniversalCommand {
    /// Execute the universal command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        info!(inputs = self.inputs.len(), "executing universal command");

        merge_universal(
            &session.runner,
            &session.config.toolchain.locator,
            &self.inputs,
            &self.output,
        )?;

        if !cli.quiet {
            output::success(&format!(
                "Merged {} binaries into {}",
                self.inputs.len(),
                style(self.output.display()).cyan()
            ));
        }
        Ok(())
    }
}
