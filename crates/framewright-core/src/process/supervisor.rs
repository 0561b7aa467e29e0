//! Registry of in-flight child processes

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

/// Owns the set of child processes that are currently running.
///
/// The runner registers every spawned process here and the registration is
/// removed when the process has been waited on, whatever the outcome. The
/// cancellation handler reads the set from another thread to terminate
/// everything that is still alive.
///
/// Registration happens right after spawn, since the pid is only known then.
/// An interrupt between spawn and registration leaves that child running.
/// Deregistration happens after the child has been reaped, so an interrupt in
/// that gap sends SIGTERM to a pid the OS may already have reused.
#[derive(Debug, Default)]
pub struct ProcessSupervisor {
    live: Mutex<Vec<u32>>,
}

impl ProcessSupervisor {
    /// Create an empty supervisor
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a running process. The returned guard deregisters it on drop.
    pub fn register(&self, pid: u32) -> Registration<'_> {
        self.lock().push(pid);
        debug!(pid, "registered child process");
        Registration {
            supervisor: self,
            pid,
        }
    }

    /// Snapshot of the process ids currently registered
    pub fn live_pids(&self) -> Vec<u32> {
        self.lock().clone()
    }

    /// Number of registered processes
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no process is registered
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Send a terminate request to every registered process.
    ///
    /// Returns how many requests were delivered.
    pub fn terminate_all(&self) -> usize {
        let pids = self.live_pids();
        let mut delivered = 0;
        for pid in pids {
            if terminate(pid) {
                delivered += 1;
            } else {
                warn!(pid, "failed to send terminate request");
            }
        }
        delivered
    }

    fn deregister(&self, pid: u32) {
        let mut live = self.lock();
        if let Some(index) = live.iter().position(|p| *p == pid) {
            live.remove(index);
            debug!(pid, "deregistered child process");
        }
    }

    // A panic while holding the lock leaves a plain Vec<u32> behind, which is
    // still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<u32>> {
        self.live.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Keeps a process registered for as long as it lives
#[derive(Debug)]
pub struct Registration<'a> {
    supervisor: &'a ProcessSupervisor,
    pid: u32,
}

impl Registration<'_> {
    /// Process id held by this registration
    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.supervisor.deregister(self.pid);
    }
}

#[cfg(unix)]
fn terminate(pid: u32) -> bool {
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return false;
    };
    // SAFETY: kill(2) has no memory-safety preconditions.
    unsafe { libc::kill(pid, libc::SIGTERM) == 0 }
}

#[cfg(not(unix))]
fn terminate(pid: u32) -> bool {
    warn!(pid, "process termination is only supported on unix hosts");
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_is_removed_on_drop() {
        let supervisor = ProcessSupervisor::new();
        {
            let first = supervisor.register(101);
            let _second = supervisor.register(102);
            assert_eq!(first.pid(), 101);
            assert_eq!(supervisor.live_pids(), vec![101, 102]);
        }
        assert!(supervisor.is_empty());
    }

    #[test]
    fn test_deregister_keeps_other_entries() {
        let supervisor = ProcessSupervisor::new();
        let keep = supervisor.register(7);
        drop(supervisor.register(8));
        assert_eq!(supervisor.live_pids(), vec![7]);
        drop(keep);
        assert_eq!(supervisor.len(), 0);
    }

    #[test]
    fn test_terminate_all_with_nothing_registered() {
        let supervisor = ProcessSupervisor::new();
        assert_eq!(supervisor.terminate_all(), 0);
    }
}
