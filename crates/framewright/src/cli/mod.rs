//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};

use framewright_apple::{PlatformVariant, Toolchain};
use framewright_core::config::{load_config_or_default, Config};
use framewright_core::{CommandRunner, ProcessSupervisor};

use commands::{
    AssembleCommand, BuildCommand, CmakeToolchainCommand, CompletionsCommand, EnvCommand,
    ModulemapCommand, PlatformsCommand, PlistCommand, RepackageCommand, ToolchainCommand,
    UniversalCommand,
};

/// framewright - Apple framework bundles from cross-compiled native code
#[derive(Debug, Parser)]
#[command(name = "framewright")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List supported platforms and their toolchain facts
    Platforms(PlatformsCommand),

    /// Resolve SDK and compiler paths for a platform
    Toolchain(ToolchainCommand),

    /// Render a module map
    Modulemap(ModulemapCommand),

    /// Render a framework Info.plist
    #[command(disable_version_flag = true)]
    Plist(PlistCommand),

    /// Render the CMake toolchain fragment
    CmakeToolchain(CmakeToolchainCommand),

    /// Print the cross-compilation environment for a platform
    Env(EnvCommand),

    /// Run the configured build command, then assemble the framework
    Build(BuildCommand),

    /// Convert a flat framework into the versioned bundle layout
    Repackage(RepackageCommand),

    /// Assemble a framework from the configured binary and headers
    Assemble(AssembleCommand),

    /// Merge per-architecture binaries into one universal binary
    Universal(UniversalCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Target platform argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    /// tvOS devices
    #[value(name = "tvos")]
    TvOs,
    /// tvOS simulator
    #[value(name = "tvos-simulator")]
    TvOsSimulator,
    /// iOS devices (iPhone, iPad)
    #[value(name = "ios")]
    Ios,
    /// iOS simulator
    #[value(name = "ios-simulator")]
    IosSimulator,
    /// macOS desktop
    #[value(name = "macos")]
    MacOs,
    /// Mac Catalyst
    #[value(name = "mac-catalyst")]
    MacCatalyst,
    /// watchOS devices
    #[value(name = "watchos")]
    WatchOs,
    /// watchOS simulator
    #[value(name = "watchos-simulator")]
    WatchOsSimulator,
}

impl From<PlatformArg> for PlatformVariant {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::TvOs => PlatformVariant::TvOs,
            PlatformArg::TvOsSimulator => PlatformVariant::TvOsSimulator,
            PlatformArg::Ios => PlatformVariant::Ios,
            PlatformArg::IosSimulator => PlatformVariant::IosSimulator,
            PlatformArg::MacOs => PlatformVariant::MacOs,
            PlatformArg::MacCatalyst => PlatformVariant::MacCatalyst,
            PlatformArg::WatchOs => PlatformVariant::WatchOs,
            PlatformArg::WatchOsSimulator => PlatformVariant::WatchOsSimulator,
        }
    }
}

/// Configuration and process plumbing shared by commands
#[derive(Debug)]
pub struct Session {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    /// Directory relative config paths resolve against
    pub base_dir: PathBuf,
    pub runner: CommandRunner,
}

impl Session {
    fn load(supervisor: Arc<ProcessSupervisor>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd);
        let base_dir = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or(cwd);

        let runner = CommandRunner::new(supervisor).with_shell(&config.toolchain.shell);
        debug!(base_dir = %base_dir.display(), "session ready");

        Ok(Self {
            config,
            config_path,
            base_dir,
            runner,
        })
    }

    /// Toolchain resolver using the configured locator
    pub fn toolchain(&self) -> Toolchain {
        let locator = &self.config.toolchain.locator;
        if let Some(program) = locator.split_whitespace().next() {
            if which::which(program).is_err() {
                warn!(locator = %locator, "SDK locator not found on PATH");
            }
        }
        Toolchain::new(self.runner.clone(), locator.clone())
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self, supervisor: Arc<ProcessSupervisor>) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        let session = Session::load(supervisor)?;

        match self.command {
            Commands::Platforms(ref cmd) => cmd.execute(&self),
            Commands::Toolchain(ref cmd) => cmd.execute(&self, &session),
            Commands::Modulemap(ref cmd) => cmd.execute(&self),
            Commands::Plist(ref cmd) => cmd.execute(&self, &session),
            Commands::CmakeToolchain(ref cmd) => cmd.execute(&self),
            Commands::Env(ref cmd) => cmd.execute(&self, &session),
            Commands::Build(ref cmd) => cmd.execute(&self, &session),
            Commands::Repackage(ref cmd) => cmd.execute(&self, &session),
            Commands::Assemble(ref cmd) => cmd.execute(&self, &session),
            Commands::Universal(ref cmd) => cmd.execute(&self, &session),
            Commands::Completions(ref cmd) => cmd.execute(&self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_platform_arg_covers_catalog() {
        let converted: Vec<PlatformVariant> = PlatformArg::value_variants()
            .iter()
            .copied()
            .map(PlatformVariant::from)
            .collect();
        assert_eq!(converted, PlatformVariant::ALL.to_vec());
    }

    #[test]
    fn test_platform_arg_names_match_identifiers() {
        for arg in PlatformArg::value_variants() {
            let name = arg.to_possible_value().unwrap().get_name().to_string();
            assert_eq!(name, PlatformVariant::from(*arg).as_str());
        }
    }

    #[test]
    fn test_parse_repackage() {
        let cli = Cli::try_parse_from([
            "framewright",
            "repackage",
            "build/MyLib.framework",
            "--binary",
            "MyLib",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Repackage(_)));
    }

    #[test]
    fn test_universal_requires_inputs() {
        let result = Cli::try_parse_from(["framewright", "universal", "-o", "out/libfoo.a"]);
        assert!(result.is_err());
    }
}
