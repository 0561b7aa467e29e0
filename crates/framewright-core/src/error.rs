//! Error types for framewright

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the core error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for framewright core operations
#[derive(Debug, Error)]
pub enum Error {
    /// A command exited with a code other than the one the caller expected.
    ///
    /// Every higher-level failure (missing SDK, failed move, broken symlink)
    /// surfaces as this variant because it is produced by a shelled-out tool.
    #[error("Command failed with exit code {actual} (expected {expected}): {command}")]
    CommandFailed {
        command: String,
        expected: i32,
        actual: i32,
    },

    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO errors (e.g. the shell itself could not be spawned)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, expected: i32, actual: i32) -> Self {
        Self::CommandFailed {
            command: command.into(),
            expected,
            actual,
        }
    }

    /// Get exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { actual, .. } if *actual != 0 => *actual,
            Self::CommandFailed { .. } => 1,
            Self::Config(_) => 2,
            Self::Io(_) => 7,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
