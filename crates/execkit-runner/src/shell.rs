//! Shell-delegated execution.
//!
//! The one operation in the runner that grants full shell semantics
//! (globbing, pipes, redirection syntax). The direct operations in
//! [`crate::execute`] never interpret their arguments.

use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use execkit_common::{ExecError, ExecResult, ExitOutcome};
use tracing::{debug, error, warn};

const SHELL: &str = "/bin/sh";

/// Run a command line under the platform shell and classify its exit.
///
/// Stdio is inherited from the caller, matching `system(3)` behavior.
pub fn shell_status(cmd: &str) -> ExecResult<ExitOutcome> {
    let status = Command::new(SHELL)
        .arg("-c")
        .arg(cmd)
        .status()
        .map_err(|e| ExecError::spawn_failed(SHELL, e.to_string()))?;

    Ok(match status.code() {
        Some(code) => ExitOutcome::Exited(code),
        None => ExitOutcome::Signaled(status.signal().unwrap_or(-1)),
    })
}

/// Run a command line with full shell semantics.
///
/// An absent command is rejected with no side effect. Otherwise returns
/// true iff the shell could be invoked and the command exited normally
/// with code 0.
pub fn run_via_shell(cmd: Option<&str>) -> bool {
    let Some(cmd) = cmd else {
        warn!("run_via_shell called without a command");
        return false;
    };

    match shell_status(cmd) {
        Ok(outcome) if outcome.success() => true,
        Ok(outcome) => {
            debug!(%outcome, cmd, "shell command did not succeed");
            false
        }
        Err(err) => {
            error!(%err, cmd, "shell invocation failed");
            false
        }
    }
}
