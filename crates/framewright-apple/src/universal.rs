//! Universal (fat) binary creation with `lipo`

use std::path::{Path, PathBuf};

use tracing::info;

use framewright_core::fs;
use framewright_core::process::quote;
use framewright_core::{CommandRunner, RunOptions};

use crate::error::{FrameworkError, Result};

/// Merge per-architecture binaries into `output`.
///
/// Runs `<locator> lipo -create -output <output> <inputs...>`. A single input
/// is copied as is.
pub fn merge_universal(
    runner: &CommandRunner,
    locator: &str,
    inputs: &[PathBuf],
    output: &Path,
) -> Result<()> {
    match inputs {
        [] => Err(FrameworkError::invalid_framework(
            output,
            "no input binaries to merge",
        )),
        [single] => {
            info!(input = %single.display(), output = %output.display(), "copying single-architecture binary");
            fs::copy_recursive(runner, single, output)?;
            Ok(())
        }
        _ => {
            info!(count = inputs.len(), output = %output.display(), "creating universal binary");
            let mut tokens = vec![
                locator.to_string(),
                "lipo".to_string(),
                "-create".to_string(),
                "-output".to_string(),
                quote(&output.to_string_lossy()),
            ];
            tokens.extend(inputs.iter().map(|p| quote(&p.to_string_lossy())));
            runner.run(&tokens, RunOptions::new())?;
            Ok(())
        }
    }
}
