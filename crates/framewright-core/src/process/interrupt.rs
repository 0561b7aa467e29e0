//! Ctrl-C handling for long-running toolchain invocations

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::Result;

use super::supervisor::ProcessSupervisor;

static INSTALLED: AtomicBool = AtomicBool::new(false);

/// Install the process-wide interrupt listener.
///
/// Once installed, the default Ctrl-C disposition no longer ends the program.
/// Instead every process still registered with `supervisor` receives a
/// terminate request and the program exits with status 0.
///
/// The signal is trapped before this function returns, so an interrupt that
/// arrives right after installation is already handled. Only the first call
/// installs anything; later calls return `Ok(false)`.
pub fn install_cancellation_handler(supervisor: Arc<ProcessSupervisor>) -> Result<bool> {
    if INSTALLED
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return Ok(false);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            INSTALLED.store(false, Ordering::SeqCst);
            return Err(e.into());
        }
    };

    let interrupts = match listen(&runtime) {
        Ok(interrupts) => interrupts,
        Err(e) => {
            INSTALLED.store(false, Ordering::SeqCst);
            return Err(e.into());
        }
    };

    let spawned = std::thread::Builder::new()
        .name("framewright-interrupt".to_string())
        .spawn(move || {
            if runtime.block_on(interrupts.recv()) {
                let terminated = supervisor.terminate_all();
                info!(terminated, "interrupt received, exiting");
                std::process::exit(0);
            }
            warn!("interrupt listener closed");
        });

    if let Err(e) = spawned {
        INSTALLED.store(false, Ordering::SeqCst);
        return Err(e.into());
    }

    Ok(true)
}

/// SIGINT stream registered with the OS before the listener thread starts
#[cfg(unix)]
struct Interrupts(tokio::signal::unix::Signal);

#[cfg(unix)]
fn listen(runtime: &tokio::runtime::Runtime) -> std::io::Result<Interrupts> {
    use tokio::signal::unix::{signal, SignalKind};

    let _context = runtime.enter();
    signal(SignalKind::interrupt()).map(Interrupts)
}

#[cfg(unix)]
impl Interrupts {
    /// Resolves to `false` once no further interrupts can be received
    async fn recv(mut self) -> bool {
        self.0.recv().await.is_some()
    }
}

#[cfg(not(unix))]
struct Interrupts;

#[cfg(not(unix))]
fn listen(_runtime: &tokio::runtime::Runtime) -> std::io::Result<Interrupts> {
    Ok(Interrupts)
}

#[cfg(not(unix))]
impl Interrupts {
    async fn recv(self) -> bool {
        tokio::signal::ctrl_c().await.is_ok()
    }
}

/// Whether the interrupt listener has been installed in this process
pub fn is_installed() -> bool {
    INSTALLED.load(Ordering::SeqCst)
}
