//! Env command - print the cross-compilation environment

use clap::Args;
use tracing::info;

use framewright_apple::{BuildEnvironment, PlatformVariant};
use framewright_core::process::quote;

use crate::cli::{Cli, OutputFormat, PlatformArg, Session};

/// Print the cross-compilation environment for a platform
#[derive(Debug, Args)]
pub struct EnvCommand {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,

    /// Minimum OS version (defaults to framework.min_os_version)
    #[arg(long)]
    pub min_os: Option<String>,
}

impl EnvCommand {
    /// Execute the env command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let platform = PlatformVariant::from(self.platform);
        info!(platform = %platform, "executing env command");

        let config = &session.config;
        let min_os = self
            .min_os
            .as_deref()
            .unwrap_or(&config.framework.min_os_version);
        let find_root = config
            .toolchain
            .find_root
            .as_deref()
            .map(|p| session.resolve_path(p));

        let env = BuildEnvironment::resolve(
            &session.toolchain(),
            platform,
            min_os,
            find_root.as_deref(),
        )?;

        match cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&env)?),
            OutputFormat::Text => print!("{}", export_lines(&env)),
        }

        Ok(())
    }
}

/// Render `export KEY=value` lines a POSIX shell can `eval`
fn export_lines(env: &BuildEnvironment) -> String {
    env.vars()
        .iter()
        .map(|(key, value)| format!("export {}={}\n", key, quote(value)))
        .collect()
}
