//! Error types for Apple framework assembly

use std::path::PathBuf;
use thiserror::Error;

/// Result type for framework operations
pub type Result<T> = std::result::Result<T, FrameworkError>;

/// Framework assembly errors
#[derive(Error, Debug)]
pub enum FrameworkError {
    /// Command, configuration or IO failure from the core crate
    #[error(transparent)]
    Core(#[from] framewright_core::Error),

    /// A flat framework directory is missing something required
    #[error("Invalid framework at {path}: {message}")]
    InvalidFramework { path: PathBuf, message: String },

    /// A rendered or existing property list could not be read back
    #[error("Property list error: {0}")]
    Plist(#[from] plist::Error),

    /// Unknown platform name
    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),

    /// Unknown architecture name
    #[error("Unknown architecture '{0}'")]
    UnknownArchitecture(String),

    /// Required framework setting missing from the configuration
    #[error("Missing framework setting: {0}")]
    MissingSetting(String),
}

impl FrameworkError {
    /// Create an invalid framework error
    pub fn invalid_framework(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidFramework {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get exit code for CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) => e.exit_code(),
            Self::InvalidFramework { .. } => 13,
            Self::Plist(_) => 8,
            Self::UnknownPlatform(_) | Self::UnknownArchitecture(_) => 5,
            Self::MissingSetting(_) => 4,
        }
    }
}

impl From<std::io::Error> for FrameworkError {
    fn from(e: std::io::Error) -> Self {
        Self::Core(e.into())
    }
}
