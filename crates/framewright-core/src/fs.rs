//! Filesystem primitives used while assembling framework bundles
//!
//! Moves, copies and symlinks go through the [`CommandRunner`] so that they
//! show up in the command audit trail and fail with the same
//! [`Error::CommandFailed`] as every other step.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::process::{quote, CommandRunner, RunOptions};

/// Create a directory and all of its parents
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "creating directory");
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `content` to `path`, replacing any existing file
pub fn write_text(content: &str, path: &Path) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing file");
    std::fs::write(path, content)?;
    Ok(())
}

/// Move `src` to `dst` with `mv`
pub fn move_path(runner: &CommandRunner, src: &Path, dst: &Path) -> Result<()> {
    runner.run(&["mv", &quote_path(src), &quote_path(dst)], RunOptions::new())?;
    Ok(())
}

/// Recursively copy `src` to `dst` with `cp -R`
pub fn copy_recursive(runner: &CommandRunner, src: &Path, dst: &Path) -> Result<()> {
    runner.run(
        &["cp", "-R", &quote_path(src), &quote_path(dst)],
        RunOptions::new(),
    )?;
    Ok(())
}

/// Create a symbolic link at `link` pointing to `target`.
///
/// `target` is stored verbatim, so relative targets resolve against the
/// directory containing `link`.
pub fn symlink(runner: &CommandRunner, target: &Path, link: &Path) -> Result<()> {
    runner.run(
        &["ln", "-s", &quote_path(target), &quote_path(link)],
        RunOptions::new(),
    )?;
    Ok(())
}

/// Restores the previous working directory when dropped
#[derive(Debug)]
pub struct CurrentDirGuard {
    previous: PathBuf,
}

impl CurrentDirGuard {
    /// Change into `path`, remembering the current directory
    pub fn enter(path: &Path) -> Result<Self> {
        let previous = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        debug!(from = %previous.display(), to = %path.display(), "changed directory");
        Ok(Self { previous })
    }

    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        if let Err(e) = std::env::set_current_dir(&self.previous) {
            tracing::warn!(
                path = %self.previous.display(),
                error = %e,
                "failed to restore working directory"
            );
        }
    }
}

/// Run `f` with `path` as the working directory.
///
/// The previous directory is restored on every exit path, including when `f`
/// fails or panics.
pub fn with_current_dir<T, E, F>(path: &Path, f: F) -> std::result::Result<T, E>
where
    F: FnOnce() -> std::result::Result<T, E>,
    E: From<Error>,
{
    let _guard = CurrentDirGuard::enter(path).map_err(E::from)?;
    f()
}

fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSupervisor;
    use std::sync::{Arc, Mutex};

    // Tests that change the working directory must not interleave.
    static CWD_LOCK: Mutex<()> = Mutex::new(());

    fn runner() -> CommandRunner {
        CommandRunner::new(Arc::new(ProcessSupervisor::new()))
    }

    #[test]
    fn test_move_and_symlink_with_spaces() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a file");
        let dst = dir.path().join("moved file");
        write_text("content", &src).unwrap();

        move_path(&runner(), &src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "content");

        let link = dir.path().join("link");
        symlink(&runner(), Path::new("moved file"), &link).unwrap();
        assert_eq!(std::fs::read_link(&link).unwrap(), Path::new("moved file"));
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "content");
    }

    #[test]
    fn test_move_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = move_path(
            &runner(),
            &dir.path().join("missing"),
            &dir.path().join("dst"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { .. }));
    }

    #[test]
    fn test_copy_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("include");
        create_dir_all(&src.join("nested")).unwrap();
        write_text("int x;", &src.join("nested/x.h")).unwrap();

        let dst = dir.path().join("Headers");
        copy_recursive(&runner(), &src, &dst).unwrap();
        assert_eq!(
            std::fs::read_to_string(dst.join("nested/x.h")).unwrap(),
            "int x;"
        );
    }

    #[test]
    fn test_with_current_dir_restores_on_success() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();

        let inside: Result<PathBuf> =
            with_current_dir(dir.path(), || Ok(std::env::current_dir()?));

        assert_eq!(
            inside.unwrap().canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_with_current_dir_restores_on_failure() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let dir = tempfile::tempdir().unwrap();
        let before = std::env::current_dir().unwrap();

        let result: Result<()> = with_current_dir(dir.path(), || {
            Err(Error::command_failed("false", 0, 1))
        });

        assert!(result.is_err());
        assert_eq!(std::env::current_dir().unwrap(), before);
    }

    #[test]
    fn test_with_current_dir_missing_directory() {
        let _lock = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let before = std::env::current_dir().unwrap();
        let result: Result<()> = with_current_dir(Path::new("/nonexistent/framewright"), || Ok(()));
        assert!(matches!(result, Err(Error::Io(_))));
        assert_eq!(std::env::current_dir().unwrap(), before);
    }
}
