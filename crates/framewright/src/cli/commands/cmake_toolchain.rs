//! CMake toolchain command - render the toolchain fragment

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use framewright_apple::render_cmake_toolchain;

use crate::cli::output::emit;
use crate::cli::Cli;

/// Render the CMake toolchain fragment
#[derive(Debug, Args)]
pub struct CmakeToolchainCommand {
    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CmakeToolchainCommand {
    /// Execute the cmake-toolchain command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing cmake-toolchain command");
        emit(&render_cmake_toolchain(), self.output.as_deref(), cli.quiet)
    }
}
