//! Synchronous shell command execution

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Arc;

use console::style;
use tracing::debug;

use crate::error::{Error, Result};

use super::supervisor::ProcessSupervisor;

/// Default shell used to interpret command lines
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Where a child's standard input comes from
#[derive(Debug)]
pub enum Stdin {
    /// Inherit the parent's standard input
    Inherit,
    /// Read from the null device
    Null,
    /// Feed the given text and close the stream
    Text(String),
    /// Read from an open file
    File(File),
}

/// Where a child's standard output or error goes
#[derive(Debug)]
pub enum Stream {
    /// Inherit the parent's stream
    Inherit,
    /// Discard everything
    Null,
    /// Collect into memory and return it in [`RunOutput`]
    Capture,
    /// Write to an open file
    File(File),
}

impl Stream {
    fn is_capture(&self) -> bool {
        matches!(self, Self::Capture)
    }

    fn into_stdio(self) -> Stdio {
        match self {
            Self::Inherit => Stdio::inherit(),
            Self::Null => Stdio::null(),
            Self::Capture => Stdio::piped(),
            Self::File(file) => Stdio::from(file),
        }
    }
}

/// Options for a single [`CommandRunner::run`] invocation
#[derive(Debug)]
pub struct RunOptions {
    pub stdin: Option<Stdin>,
    pub stdout: Option<Stream>,
    pub stderr: Option<Stream>,
    /// Full environment of the child. `None` forwards only `PATH`.
    pub env: Option<HashMap<String, String>>,
    pub current_dir: Option<PathBuf>,
    pub expected_exit_code: i32,
    /// Suppress the command echo and discard streams that were not given explicitly
    pub silent: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            stdin: None,
            stdout: None,
            stderr: None,
            env: None,
            current_dir: None,
            expected_exit_code: 0,
            silent: false,
        }
    }
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stdin(mut self, stdin: Stdin) -> Self {
        self.stdin = Some(stdin);
        self
    }

    pub fn stdout(mut self, stdout: Stream) -> Self {
        self.stdout = Some(stdout);
        self
    }

    pub fn stderr(mut self, stderr: Stream) -> Self {
        self.stderr = Some(stderr);
        self
    }

    pub fn env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn expect_exit_code(mut self, code: i32) -> Self {
        self.expected_exit_code = code;
        self
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

/// Result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub exit_code: i32,
    /// Captured standard output, when [`Stream::Capture`] was requested
    pub stdout: Option<String>,
    /// Captured standard error, when [`Stream::Capture`] was requested
    pub stderr: Option<String>,
}

/// Runs command lines through a POSIX shell, one at a time.
///
/// Each call blocks until the child exits. Children are registered with the
/// shared [`ProcessSupervisor`] while they run.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    shell: PathBuf,
    supervisor: Arc<ProcessSupervisor>,
}

impl CommandRunner {
    /// Create a runner using `/bin/sh`
    pub fn new(supervisor: Arc<ProcessSupervisor>) -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            supervisor,
        }
    }

    /// Use a different shell executable
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    pub fn supervisor(&self) -> &Arc<ProcessSupervisor> {
        &self.supervisor
    }

    /// Join `tokens` into one command line and run it with `<shell> -c`.
    ///
    /// Fails with [`Error::CommandFailed`] when the exit code differs from
    /// `options.expected_exit_code`.
    pub fn run<S: AsRef<str>>(&self, tokens: &[S], options: RunOptions) -> Result<RunOutput> {
        let line = join_tokens(tokens);
        let RunOptions {
            stdin,
            stdout,
            stderr,
            env,
            current_dir,
            expected_exit_code,
            silent,
        } = options;

        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(&line);

        cmd.env_clear();
        match env {
            Some(env) => {
                cmd.envs(env);
            }
            None => {
                if let Some(path) = std::env::var_os("PATH") {
                    cmd.env("PATH", path);
                }
            }
        }

        if let Some(dir) = current_dir {
            cmd.current_dir(dir);
        }

        let default_stream = || if silent { Stream::Null } else { Stream::Inherit };
        let stdout = stdout.unwrap_or_else(default_stream);
        let stderr = stderr.unwrap_or_else(default_stream);
        let capture_stdout = stdout.is_capture();
        let capture_stderr = stderr.is_capture();
        cmd.stdout(stdout.into_stdio());
        cmd.stderr(stderr.into_stdio());

        let mut input_text = None;
        match stdin {
            Some(Stdin::Text(text)) => {
                cmd.stdin(Stdio::piped());
                input_text = Some(text);
            }
            Some(Stdin::File(file)) => {
                cmd.stdin(Stdio::from(file));
            }
            Some(Stdin::Null) => {
                cmd.stdin(Stdio::null());
            }
            Some(Stdin::Inherit) => {
                cmd.stdin(Stdio::inherit());
            }
            None if silent => {
                cmd.stdin(Stdio::null());
            }
            None => {
                cmd.stdin(Stdio::inherit());
            }
        }

        if !silent {
            println!("{}", line);
        }
        debug!(command = %line, shell = %self.shell.display(), "running command");

        let mut child = cmd.spawn()?;
        let registration = self.supervisor.register(child.id());

        let writer = match (input_text, child.stdin.take()) {
            (Some(text), Some(mut pipe)) => Some(std::thread::spawn(move || {
                // The child may exit without reading its input.
                let _ = pipe.write_all(text.as_bytes());
            })),
            _ => None,
        };

        let output = child.wait_with_output();
        drop(registration);
        if let Some(writer) = writer {
            let _ = writer.join();
        }
        let output = output?;

        let exit_code = exit_code(output.status);
        debug!(command = %line, exit_code, "command finished");

        if exit_code != expected_exit_code {
            eprintln!(
                "{} exit code {} from: {}",
                style("✗").red().bold(),
                exit_code,
                line
            );
            return Err(Error::command_failed(line, expected_exit_code, exit_code));
        }

        Ok(RunOutput {
            exit_code,
            stdout: capture_stdout.then(|| String::from_utf8_lossy(&output.stdout).into_owned()),
            stderr: capture_stderr.then(|| String::from_utf8_lossy(&output.stderr).into_owned()),
        })
    }

    /// Run silently and return the first non-empty line of standard output.
    pub fn read_first_line<S: AsRef<str>>(&self, tokens: &[S]) -> Result<String> {
        let output = self.run(
            tokens,
            RunOptions::new().stdout(Stream::Capture).silent(true),
        )?;
        Ok(first_line(output.stdout.as_deref().unwrap_or_default()))
    }
}

/// Quote a value so the shell passes it through as a single word
pub fn quote(value: &str) -> String {
    if !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c))
    {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_line(text: &str) -> String {
    text.lines()
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn runner() -> CommandRunner {
        CommandRunner::new(Arc::new(ProcessSupervisor::new()))
    }

    #[test]
    fn test_true_succeeds() {
        let output = runner()
            .run(&["true"], RunOptions::new().silent(true))
            .unwrap();
        assert_eq!(output.exit_code, 0);
        assert_eq!(output.stdout, None);
    }

    #[test]
    fn test_false_fails_with_command_failed() {
        let err = runner()
            .run(&["false"], RunOptions::new().silent(true))
            .unwrap_err();
        match err {
            Error::CommandFailed {
                command,
                expected,
                actual,
            } => {
                assert_eq!(command, "false");
                assert_eq!(expected, 0);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_expected_nonzero_exit_code() {
        let output = runner()
            .run(&["exit 7"], RunOptions::new().expect_exit_code(7).silent(true))
            .unwrap();
        assert_eq!(output.exit_code, 7);

        let err = runner()
            .run(&["exit 0"], RunOptions::new().expect_exit_code(7).silent(true))
            .unwrap_err();
        assert!(matches!(err, Error::CommandFailed { actual: 0, expected: 7, .. }));
    }

    #[test]
    fn test_read_first_line() {
        let line = runner().read_first_line(&["printf 'a\\nb\\n'"]).unwrap();
        assert_eq!(line, "a");
    }

    #[test]
    fn test_read_first_line_skips_empty_lines() {
        let line = runner().read_first_line(&["printf '\\n\\nsecond\\n'"]).unwrap();
        assert_eq!(line, "second");
    }

    #[test]
    fn test_read_first_line_without_output() {
        assert_eq!(runner().read_first_line(&["true"]).unwrap(), "");
    }

    #[test]
    fn test_tokens_are_joined_with_spaces() {
        let line = runner().read_first_line(&["echo", "one", "two"]).unwrap();
        assert_eq!(line, "one two");
    }

    #[test]
    fn test_default_environment_only_forwards_path() {
        std::env::set_var("FRAMEWRIGHT_RUNNER_TEST_VAR", "leaked");
        let line = runner()
            .read_first_line(&["echo \"${FRAMEWRIGHT_RUNNER_TEST_VAR:-unset}\""])
            .unwrap();
        assert_eq!(line, "unset");

        let path = runner().read_first_line(&["echo \"$PATH\""]).unwrap();
        assert_eq!(Some(path), std::env::var("PATH").ok());
    }

    #[test]
    fn test_explicit_environment() {
        let mut env = HashMap::new();
        env.insert("GREETING".to_string(), "hello".to_string());
        let output = runner()
            .run(
                &["echo $GREETING"],
                RunOptions::new().env(env).stdout(Stream::Capture).silent(true),
            )
            .unwrap();
        assert_eq!(output.stdout.as_deref(), Some("hello\n"));
    }

    #[test]
    fn test_stdin_text_and_stderr_capture() {
        let output = runner()
            .run(
                &["cat; echo oops >&2"],
                RunOptions::new()
                    .stdin(Stdin::Text("piped input".into()))
                    .stdout(Stream::Capture)
                    .stderr(Stream::Capture)
                    .silent(true),
            )
            .unwrap();
        assert_eq!(output.stdout.as_deref(), Some("piped input"));
        assert_eq!(output.stderr.as_deref(), Some("oops\n"));
    }

    #[test]
    fn test_stdout_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let file = File::create(&path).unwrap();
        runner()
            .run(&["echo to-file"], RunOptions::new().stdout(Stream::File(file)).silent(true))
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "to-file\n");
    }

    #[test]
    fn test_current_dir_option() {
        let dir = tempfile::tempdir().unwrap();
        let output = runner()
            .run(
                &["pwd -P"],
                RunOptions::new()
                    .current_dir(dir.path())
                    .stdout(Stream::Capture)
                    .silent(true),
            )
            .unwrap();
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(output.stdout.unwrap().trim(), expected.to_str().unwrap());
    }

    #[test]
    fn test_registry_is_empty_after_failure() {
        let runner = runner();
        let _ = runner.run(&["exit 3"], RunOptions::new().silent(true));
        assert!(runner.supervisor().is_empty());
    }

    #[test]
    fn test_terminate_all_stops_running_child() {
        let runner = runner();
        let supervisor = Arc::clone(runner.supervisor());
        let handle = std::thread::spawn(move || {
            runner.run(&["exec sleep 30"], RunOptions::new().silent(true))
        });

        let deadline = Instant::now() + Duration::from_secs(10);
        while supervisor.is_empty() {
            assert!(Instant::now() < deadline, "child was never registered");
            std::thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(supervisor.terminate_all(), 1);

        let err = handle.join().unwrap().unwrap_err();
        assert!(matches!(err, Error::CommandFailed { actual: 143, .. }));
        assert!(supervisor.is_empty());
    }

    #[test]
    fn test_missing_shell_is_io_error() {
        let err = runner()
            .with_shell("/nonexistent/shell")
            .run(&["true"], RunOptions::new().silent(true))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("plain/path-1.0"), "plain/path-1.0");
        assert_eq!(quote("with space"), "'with space'");
        assert_eq!(quote("it's"), r"'it'\''s'");
        assert_eq!(quote(""), "''");
    }
}
