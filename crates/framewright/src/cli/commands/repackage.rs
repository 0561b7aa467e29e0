//! Repackage command - flat framework to versioned layout

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use framewright_apple::repackage;

use crate::cli::output;
use crate::cli::{Cli, Session};

/// Convert a flat framework into the versioned bundle layout
#[derive(Debug, Args)]
pub struct RepackageCommand {
    /// Path to the `.framework` directory
    pub path: PathBuf,

    /// Name of the binary inside the framework (defaults to the bundle name)
    #[arg(short, long)]
    pub binary: Option<String>,
}

impl RepackageCommand {
    fn binary_name(&self) -> anyhow::Result<String> {
        if let Some(ref binary) = self.binary {
            return Ok(binary.clone());
        }
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow::anyhow!("cannot infer binary name from {}", self.path.display()))
    }

    /// Execute the repackage command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let binary = self.binary_name()?;
        info!(path = %self.path.display(), binary = %binary, "executing repackage command");

        repackage(&session.runner, &self.path, &binary)?;

        if !cli.quiet {
            output::success(&format!(
                "Repackaged {} into Versions/A",
                style(self.path.display()).cyan()
            ));
        }
        Ok(())
    }
}
