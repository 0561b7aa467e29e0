//! Build command - run the native build, then assemble the framework

use clap::Args;
use console::style;
use tracing::{debug, info};

use framewright_apple::{assemble, BuildEnvironment, FrameworkSpec, PlatformVariant};
use framewright_core::fs::with_current_dir;
use framewright_core::RunOptions;

use crate::cli::output;
use crate::cli::{Cli, PlatformArg, Session};

/// Run the configured build command, then assemble the framework
#[derive(Debug, Args)]
pub struct BuildCommand {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,

    /// Only run the build command, skip framework assembly
    #[arg(long)]
    pub no_assemble: bool,
}

impl BuildCommand {
    /// Execute the build command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let platform = PlatformVariant::from(self.platform);
        info!(platform = %platform, "executing build command");

        let config = &session.config;
        if cli.verbose {
            match session.config_path {
                Some(ref path) => output::info(&format!("Using config {}", path.display())),
                None => output::info("No config file found, using defaults"),
            }
        }

        if config.build.command.is_empty() {
            anyhow::bail!("no build command configured; set [build].command");
        }

        let toolchain = session.toolchain();
        let find_root = config
            .toolchain
            .find_root
            .as_deref()
            .map(|p| session.resolve_path(p));
        let env = BuildEnvironment::resolve(
            &toolchain,
            platform,
            &config.framework.min_os_version,
            find_root.as_deref(),
        )?;

        let working_dir = session.resolve_path(&config.build.working_dir);
        debug!(dir = %working_dir.display(), "running build command");
        with_current_dir(&working_dir, || -> anyhow::Result<()> {
            session.runner.run(
                &config.build.command,
                RunOptions::new().env(env.to_env()).silent(cli.quiet),
            )?;
            Ok(())
        })?;

        if self.no_assemble {
            return Ok(());
        }

        let spec = FrameworkSpec::from_config(&config.framework, &session.base_dir)?;
        let output_dir = session.resolve_path(&config.build.output_dir);
        let framework = assemble(&toolchain, &spec, platform, &output_dir)?;

        if !cli.quiet {
            output::success(&format!(
                "Built {}",
                style(framework.display()).cyan()
            ));
        }
        Ok(())
    }
}
