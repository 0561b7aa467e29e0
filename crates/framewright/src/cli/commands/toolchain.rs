//! Toolchain command - resolve SDK and compiler paths

use clap::Args;
use tracing::info;

use framewright_apple::PlatformVariant;

use crate::cli::output::{header, key_value};
use crate::cli::{Cli, OutputFormat, PlatformArg, Session};

/// Resolve SDK and compiler paths for a platform
#[derive(Debug, Args)]
pub struct ToolchainCommand {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,
}

impl ToolchainCommand {
    /// Execute the toolchain command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let platform = PlatformVariant::from(self.platform);
        info!(platform = %platform, "executing toolchain command");

        let resolved = session.toolchain().resolve(platform)?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
            OutputFormat::Text => {
                println!("{}", header(platform.as_str()));
                println!("{}", key_value("SDK path", &resolved.sdk_path.display().to_string()));
                println!("{}", key_value("SDK version", &resolved.sdk_version));
                println!("{}", key_value("cc", &resolved.cc.display().to_string()));
                println!("{}", key_value("c++", &resolved.cxx.display().to_string()));
            }
        }

        Ok(())
    }
}
