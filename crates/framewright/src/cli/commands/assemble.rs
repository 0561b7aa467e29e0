//! Assemble command - framework bundle from an existing binary

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use framewright_apple::{assemble, FrameworkSpec, PlatformVariant};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat, PlatformArg, Session};

/// Assemble a framework from the configured binary and headers
#[derive(Debug, Args)]
pub struct AssembleCommand {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,

    /// Output directory (defaults to build.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl AssembleCommand {
    /// Execute the assemble command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let platform = PlatformVariant::from(self.platform);
        info!(platform = %platform, "executing assemble command");

        let spec = FrameworkSpec::from_config(&session.config.framework, &session.base_dir)?;
        let output_dir = match self.output {
            Some(ref dir) => dir.clone(),
            None => session.resolve_path(&session.config.build.output_dir),
        };

        let framework = assemble(&session.toolchain(), &spec, platform, &output_dir)?;

        match cli.format {
            OutputFormat::Json => {
                let result = serde_json::json!({
                    "platform": platform,
                    "framework": framework,
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Assembled {}",
                        style(framework.display()).cyan()
                    ));
                }
            }
        }
        Ok(())
    }
}
