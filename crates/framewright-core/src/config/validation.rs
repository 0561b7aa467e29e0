//! Configuration validation

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_framework(config)?;
    validate_toolchain(config)?;
    debug!("configuration validation passed");
    Ok(())
}

static MODULE_NAME: OnceLock<Option<Regex>> = OnceLock::new();
static BUNDLE_IDENTIFIER: OnceLock<Option<Regex>> = OnceLock::new();
static OS_VERSION: OnceLock<Option<Regex>> = OnceLock::new();

/// Match `value` against a pattern compiled once per process
fn pattern_matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, value: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Whether `name` can be used as a module and bundle name
pub fn is_valid_module_name(name: &str) -> bool {
    pattern_matches(&MODULE_NAME, r"^[A-Za-z_][A-Za-z0-9_]*$", name)
}

/// Whether `identifier` is a reverse-DNS bundle identifier
pub fn is_valid_bundle_identifier(identifier: &str) -> bool {
    pattern_matches(&BUNDLE_IDENTIFIER, r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$", identifier)
}

/// Whether `version` is a dotted OS version such as `13.0`
pub fn is_valid_os_version(version: &str) -> bool {
    pattern_matches(&OS_VERSION, r"^\d+(\.\d+){0,2}$", version)
}

fn invalid(field: &str, message: impl Into<String>) -> crate::error::Error {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
    .into()
}

fn validate_framework(config: &Config) -> Result<()> {
    let framework = &config.framework;

    if let Some(ref name) = framework.name {
        if !is_valid_module_name(name) {
            return Err(invalid(
                "framework.name",
                "must start with a letter or underscore and contain only letters, digits and underscores",
            ));
        }
    }

    if semver::Version::parse(&framework.version).is_err() {
        return Err(invalid(
            "framework.version",
            format!("'{}' is not a semantic version", framework.version),
        ));
    }

    if let Some(ref identifier) = framework.identifier {
        if !is_valid_bundle_identifier(identifier) {
            return Err(invalid(
                "framework.identifier",
                "must be a reverse-DNS identifier such as com.example.MyLib",
            ));
        }
    }

    if !is_valid_os_version(&framework.min_os_version) {
        return Err(invalid(
            "framework.min_os_version",
            "must look like 13.0 or 13.0.1",
        ));
    }

    if framework.umbrella_header.is_some() && framework.umbrella_directory.is_some() {
        return Err(invalid(
            "framework.umbrella_header",
            "cannot be combined with framework.umbrella_directory",
        ));
    }

    Ok(())
}

fn validate_toolchain(config: &Config) -> Result<()> {
    if config.toolchain.locator.trim().is_empty() {
        return Err(invalid("toolchain.locator", "locator cannot be empty"));
    }

    if config.toolchain.shell.as_os_str().is_empty() {
        return Err(invalid("toolchain.shell", "shell cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn field_of(err: Error) -> String {
        match err {
            Error::Config(ConfigError::InvalidValue { field, .. }) => field,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_name() {
        let mut config = Config::default();
        config.framework.name = Some("My-Lib".to_string());
        assert_eq!(field_of(validate_config(&config).unwrap_err()), "framework.name");
    }

    #[test]
    fn test_invalid_identifier() {
        let mut config = Config::default();
        config.framework.identifier = Some("mylib".to_string());
        assert_eq!(
            field_of(validate_config(&config).unwrap_err()),
            "framework.identifier"
        );

        config.framework.identifier = Some("com.example.my-lib".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_invalid_min_os_version() {
        let mut config = Config::default();
        config.framework.min_os_version = "thirteen".to_string();
        assert_eq!(
            field_of(validate_config(&config).unwrap_err()),
            "framework.min_os_version"
        );
    }

    #[test]
    fn test_umbrella_settings_are_exclusive() {
        let mut config = Config::default();
        config.framework.umbrella_header = Some("MyLib.h".to_string());
        config.framework.umbrella_directory = Some("Headers".to_string());
        assert_eq!(
            field_of(validate_config(&config).unwrap_err()),
            "framework.umbrella_header"
        );
    }

    #[test]
    fn test_os_version_pattern_is_reused() {
        for _ in 0..3 {
            assert!(is_valid_os_version("13.0"));
            assert!(is_valid_os_version("17"));
            assert!(is_valid_os_version("10.15.7"));
            assert!(!is_valid_os_version("13.0.0.1"));
            assert!(!is_valid_os_version("v13"));
        }
        assert!(OS_VERSION.get().is_some_and(Option::is_some));
    }

    #[test]
    fn test_empty_locator() {
        let mut config = Config::default();
        config.toolchain.locator = "  ".to_string();
        assert_eq!(field_of(validate_config(&config).unwrap_err()), "toolchain.locator");
    }
}
