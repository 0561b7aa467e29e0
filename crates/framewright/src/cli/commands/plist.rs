//! Plist command - render a framework Info.plist

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use framewright_apple::{render_info_plist, BundleDescriptor, PlatformVariant};
use framewright_core::config::FrameworkConfig;

use crate::cli::output::emit;
use crate::cli::{Cli, PlatformArg, Session};

/// Render a framework Info.plist
#[derive(Debug, Args)]
pub struct PlistCommand {
    /// Target platform
    #[arg(short, long, value_enum)]
    pub platform: PlatformArg,

    /// Bundle name (defaults to framework.name)
    #[arg(long)]
    pub name: Option<String>,

    /// Bundle version (defaults to framework.version)
    #[arg(long)]
    pub version: Option<String>,

    /// Bundle identifier (defaults to framework.identifier)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Minimum OS version (defaults to framework.min_os_version)
    #[arg(long)]
    pub min_os: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PlistCommand {
    /// Merge flags over the `[framework]` section
    fn bundle(&self, config: &FrameworkConfig) -> anyhow::Result<BundleDescriptor> {
        let name = self
            .name
            .clone()
            .or_else(|| config.name.clone())
            .context("no bundle name; pass --name or set framework.name")?;
        let identifier = self
            .identifier
            .clone()
            .or_else(|| config.identifier.clone())
            .context("no bundle identifier; pass --identifier or set framework.identifier")?;

        Ok(BundleDescriptor::new(
            name,
            self.version.clone().unwrap_or_else(|| config.version.clone()),
            identifier,
            self.min_os
                .clone()
                .unwrap_or_else(|| config.min_os_version.clone()),
        ))
    }

    /// Execute the plist command
    pub fn execute(&self, cli: &Cli, session: &Session) -> anyhow::Result<()> {
        let platform = PlatformVariant::from(self.platform);
        info!(platform = %platform, "executing plist command");

        let bundle = self.bundle(&session.config.framework)?;
        let text = render_info_plist(&bundle, platform, &session.toolchain())?;
        emit(&text, self.output.as_deref(), cli.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> PlistCommand {
        PlistCommand {
            platform: PlatformArg::Ios,
            name: None,
            version: None,
            identifier: None,
            min_os: None,
            output: None,
        }
    }

    #[test]
    fn test_bundle_falls_back_to_config() {
        let config = FrameworkConfig {
            name: Some("MyLib".to_string()),
            identifier: Some("com.example.MyLib".to_string()),
            ..Default::default()
        };
        let bundle = command().bundle(&config).unwrap();
        assert_eq!(bundle.name, "MyLib");
        assert_eq!(bundle.version, "1.0.0");
        assert_eq!(bundle.min_os_version, "13.0");
    }

    #[test]
    fn test_flags_override_config() {
        let config = FrameworkConfig {
            name: Some("MyLib".to_string()),
            identifier: Some("com.example.MyLib".to_string()),
            ..Default::default()
        };
        let mut cmd = command();
        cmd.version = Some("2.1.0".to_string());
        cmd.min_os = Some("15.0".to_string());
        let bundle = cmd.bundle(&config).unwrap();
        assert_eq!(bundle.version, "2.1.0");
        assert_eq!(bundle.min_os_version, "15.0");
    }

    #[test]
    fn test_missing_identifier_is_an_error() {
        let config = FrameworkConfig {
            name: Some("MyLib".to_string()),
            ..Default::default()
        };
        let err = command().bundle(&config).unwrap_err();
        assert!(err.to_string().contains("identifier"));
    }
}
