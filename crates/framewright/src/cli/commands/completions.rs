//! Completions command - shell completion scripts

use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use tracing::info;

use crate::cli::output::emit;
use crate::cli::Cli;

/// Generate shell completions
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CompletionsCommand {
    fn render(&self) -> anyhow::Result<String> {
        let mut cmd = Cli::command();
        let mut buffer = Vec::new();
        generate(self.shell, &mut cmd, "framewright", &mut buffer);
        Ok(String::from_utf8(buffer)?)
    }

    /// Execute the completions command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(shell = %self.shell, "executing completions command");
        emit(&self.render()?, self.output.as_deref(), cli.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let cmd = CompletionsCommand {
            shell: Shell::Bash,
            output: None,
        };
        let script = cmd.render().unwrap();
        assert!(script.contains("framewright"));
        assert!(script.contains("repackage"));
        assert!(script.contains("cmake-toolchain"));
    }
}
