//! Process execution: the command runner, the live-process registry, and
//! interrupt handling.

mod interrupt;
mod runner;
mod supervisor;

pub use interrupt::{install_cancellation_handler, is_installed};
pub use runner::{quote, CommandRunner, RunOptions, RunOutput, Stdin, Stream, DEFAULT_SHELL};
pub use supervisor::{ProcessSupervisor, Registration};
