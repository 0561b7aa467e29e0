//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for framewright
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Framework being produced
    pub framework: FrameworkConfig,

    /// Toolchain and shell selection
    pub toolchain: ToolchainConfig,

    /// Native build invocation
    pub build: BuildConfig,
}

/// Framework bundle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Bundle and module name (e.g. "MyLib")
    pub name: Option<String>,

    /// Marketing version (CFBundleShortVersionString)
    pub version: String,

    /// Bundle identifier (e.g. "com.example.MyLib")
    pub identifier: Option<String>,

    /// Minimum OS version (MinimumOSVersion)
    pub min_os_version: String,

    /// Path to the built library, relative to the config file
    pub binary: Option<PathBuf>,

    /// Directory of public headers
    pub headers: Option<PathBuf>,

    /// Umbrella header file name, relative to the headers directory
    pub umbrella_header: Option<String>,

    /// Umbrella directory, relative to the framework's Headers directory
    pub umbrella_directory: Option<String>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            name: None,
            version: "1.0.0".to_string(),
            identifier: None,
            min_os_version: "13.0".to_string(),
            binary: None,
            headers: None,
            umbrella_header: None,
            umbrella_directory: None,
        }
    }
}

/// Toolchain configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// SDK locator executable
    pub locator: String,

    /// Shell used to run every command
    pub shell: PathBuf,

    /// Extra CMake find-root path exported to the toolchain fragment
    pub find_root: Option<PathBuf>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            locator: "xcrun".to_string(),
            shell: PathBuf::from(crate::process::DEFAULT_SHELL),
            find_root: None,
        }
    }
}

/// Build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Command tokens run with the cross-compilation environment
    pub command: Vec<String>,

    /// Directory the command runs in, relative to the config file
    pub working_dir: PathBuf,

    /// Where assembled frameworks are written
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: Vec::new(),
            working_dir: PathBuf::from("."),
            output_dir: PathBuf::from("build/framewright"),
        }
    }
}
