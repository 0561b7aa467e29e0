//! SDK and compiler resolution through the SDK locator (`xcrun`)

use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use framewright_core::CommandRunner;

use crate::error::Result;
use crate::platform::PlatformVariant;

/// Default SDK locator executable
pub const DEFAULT_LOCATOR: &str = "xcrun";

/// Resolved SDK and compiler locations for one platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolchainInfo {
    pub platform: PlatformVariant,
    pub sdk_path: PathBuf,
    pub sdk_version: String,
    pub cc: PathBuf,
    pub cxx: PathBuf,
}

/// Queries the SDK locator for platform toolchain facts.
///
/// Nothing is cached: every accessor runs
/// `<locator> --sdk <sdk-name> <flag>` and returns its first output line.
/// The locator is a command prefix handed to the shell as is, so it may carry
/// its own arguments (e.g. `/usr/bin/env xcrun`).
#[derive(Debug, Clone)]
pub struct Toolchain {
    runner: CommandRunner,
    locator: String,
}

impl Toolchain {
    pub fn new(runner: CommandRunner, locator: impl Into<String>) -> Self {
        Self {
            runner,
            locator: locator.into(),
        }
    }

    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Filesystem path of the platform SDK
    pub fn sdk_path(&self, platform: PlatformVariant) -> Result<PathBuf> {
        self.query(platform, &["--show-sdk-path"]).map(PathBuf::from)
    }

    /// Version string of the platform SDK
    pub fn sdk_version(&self, platform: PlatformVariant) -> Result<String> {
        self.query(platform, &["--show-sdk-version"])
    }

    /// Absolute path of the C compiler
    pub fn cc_path(&self, platform: PlatformVariant) -> Result<PathBuf> {
        self.query(platform, &["-f", "cc"]).map(PathBuf::from)
    }

    /// Absolute path of the C++ compiler
    pub fn cxx_path(&self, platform: PlatformVariant) -> Result<PathBuf> {
        self.query(platform, &["-f", "c++"]).map(PathBuf::from)
    }

    /// Resolve all four facts
    pub fn resolve(&self, platform: PlatformVariant) -> Result<ToolchainInfo> {
        Ok(ToolchainInfo {
            platform,
            sdk_path: self.sdk_path(platform)?,
            sdk_version: self.sdk_version(platform)?,
            cc: self.cc_path(platform)?,
            cxx: self.cxx_path(platform)?,
        })
    }

    fn query(&self, platform: PlatformVariant, flag: &[&str]) -> Result<String> {
        let sdk = platform.sdk_name();
        let mut tokens = vec![self.locator.clone(), "--sdk".to_string(), sdk];
        tokens.extend(flag.iter().map(|f| f.to_string()));

        let line = self.runner.read_first_line(&tokens)?;
        debug!(platform = %platform, query = ?flag, result = %line, "resolved toolchain fact");
        Ok(line)
    }
}
