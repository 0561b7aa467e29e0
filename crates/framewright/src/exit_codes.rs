//! Exit codes for the CLI

use framewright_apple::FrameworkError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Exit code for a failed command invocation
pub fn for_error(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<FrameworkError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<framewright_core::Error>() {
        return e.exit_code();
    }
    if error.downcast_ref::<framewright_core::ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failure_keeps_exit_code() {
        let err = anyhow::Error::from(FrameworkError::from(
            framewright_core::Error::command_failed("exit 9", 0, 9),
        ));
        assert_eq!(for_error(&err), 9);
    }

    #[test]
    fn test_other_errors() {
        assert_eq!(for_error(&anyhow::anyhow!("boom")), ERROR);
        let err = anyhow::Error::from(framewright_core::ConfigError::InvalidValue {
            field: "framework.version".into(),
            message: "not a semantic version".into(),
        });
        assert_eq!(for_error(&err), CONFIG_ERROR);
    }
}
