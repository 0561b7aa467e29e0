//! Modulemap command - render a module map

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use framewright_apple::{render_module_map, ModuleHeader};

use crate::cli::output::emit;
use crate::cli::Cli;

/// Render a module map
#[derive(Debug, Args)]
pub struct ModulemapCommand {
    /// Module name
    #[arg(short, long)]
    pub name: String,

    /// Umbrella header file
    #[arg(long, conflicts_with = "umbrella_dir", required_unless_present = "umbrella_dir")]
    pub umbrella_header: Option<String>,

    /// Umbrella header directory
    #[arg(long)]
    pub umbrella_dir: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ModulemapCommand {
    fn module_header(&self) -> ModuleHeader {
        match (&self.umbrella_header, &self.umbrella_dir) {
            (Some(header), _) => ModuleHeader::UmbrellaHeader(header.clone()),
            (None, Some(dir)) => ModuleHeader::UmbrellaDirectory(dir.clone()),
            (None, None) => ModuleHeader::UmbrellaHeader(format!("{}.h", self.name)),
        }
    }

    /// Execute the modulemap command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(name = %self.name, "executing modulemap command");
        let text = render_module_map(&self.name, &self.module_header());
        emit(&text, self.output.as_deref(), cli.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_umbrella_options_conflict() {
        let result = Cli::try_parse_from([
            "framewright",
            "modulemap",
            "--name",
            "Foo",
            "--umbrella-header",
            "Foo.h",
            "--umbrella-dir",
            "Headers",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_umbrella_directory_selected() {
        let cmd = ModulemapCommand {
            name: "Foo".to_string(),
            umbrella_header: None,
            umbrella_dir: Some("Headers".to_string()),
            output: None,
        };
        assert_eq!(
            cmd.module_header(),
            ModuleHeader::UmbrellaDirectory("Headers".to_string())
        );
    }
}
