//! Direct process execution: fork, optional stdout redirection, execv,
//! waitpid.
//!
//! The child-side choreography is fixed: open the redirection target,
//! duplicate it onto stdout, close the original descriptor, then replace
//! the process image. Any failing step terminates the child with a failure
//! exit status; the child never returns to caller code.

use std::ffi::{CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use execkit_common::{ExecError, ExecResult, ExitOutcome};
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{close, dup2, execv, fork, ForkResult, Pid};
use tracing::{debug, error};

/// Spawn `argv[0]` with the argument vector `argv`, optionally redirecting
/// the child's stdout to `stdout_to`, and block until the child has been
/// reaped.
///
/// This is the single underlying primitive behind [`run_directly`] and
/// [`run_directly_redirected`]. No shell interpretation takes place.
///
/// # Errors
///
/// * [`ExecError::InvalidCommand`] - empty argv, non-absolute `argv[0]`, or
///   an argument/path with an interior NUL byte; no process is created.
/// * [`ExecError::SpawnFailed`] - the OS could not fork; no child exists.
/// * [`ExecError::WaitFailed`] - waitpid itself failed; the child may
///   remain unreaped.
///
/// Child-side failures (open, dup2, execv) are not errors here: they
/// surface as a failure [`ExitOutcome`] observed from the child's exit
/// status.
pub fn execute(argv: &[String], stdout_to: Option<&Path>) -> ExecResult<ExitOutcome> {
    crate::validation::validate_argv(argv)?;

    // All conversion and allocation happens before the fork; between fork
    // and execv/_exit the child makes only async-signal-safe calls.
    let c_argv = argv
        .iter()
        .map(|arg| cstring(arg.as_bytes()))
        .collect::<ExecResult<Vec<CString>>>()?;
    let c_stdout = stdout_to
        .map(|path| cstring(path.as_os_str().as_bytes()))
        .transpose()?;

    match unsafe { fork() } {
        Err(errno) => Err(ExecError::spawn_failed(argv[0].as_str(), errno.to_string())),
        Ok(ForkResult::Child) => child_exec(&c_argv, c_stdout.as_deref()),
        Ok(ForkResult::Parent { child }) => wait_and_classify(child),
    }
}

/// Execute an argument vector directly (no shell semantics).
///
/// Returns true iff the child was created, the image replacement succeeded,
/// and the process exited normally with code 0. Exactly one child is
/// created and reaped per successful spawn.
pub fn run_directly(argv: &[String]) -> bool {
    report(execute(argv, None))
}

/// Execute an argument vector directly with the child's stdout redirected
/// to `output_path` (created if absent, truncated if present, owner
/// read/write only).
///
/// Failure semantics match [`run_directly`]; additionally a child that
/// cannot open or duplicate the redirection target counts as failure.
pub fn run_directly_redirected(output_path: Option<&Path>, argv: &[String]) -> bool {
    let Some(path) = output_path else {
        error!("run_directly_redirected called without an output path");
        return false;
    };
    report(execute(argv, Some(path)))
}

fn report(result: ExecResult<ExitOutcome>) -> bool {
    match result {
        Ok(outcome) if outcome.success() => true,
        Ok(outcome) => {
            debug!(%outcome, "child did not succeed");
            false
        }
        Err(err) => {
            error!(%err, "direct execution failed");
            false
        }
    }
}

fn cstring(bytes: &[u8]) -> ExecResult<CString> {
    CString::new(bytes)
        .map_err(|_| ExecError::invalid_command("argument contains an interior NUL byte"))
}

/// Child branch: redirect if requested, then replace the process image.
/// Only async-signal-safe calls from here on.
fn child_exec(c_argv: &[CString], stdout_to: Option<&CStr>) -> ! {
    if let Some(path) = stdout_to {
        let fd = match open(
            path,
            OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
            Mode::S_IRUSR | Mode::S_IWUSR,
        ) {
            Ok(fd) => fd,
            Err(_) => child_fail(b"execkit: failed to open redirection target\n"),
        };
        if dup2(fd, libc::STDOUT_FILENO).is_err() {
            let _ = close(fd);
            child_fail(b"execkit: failed to duplicate descriptor onto stdout\n");
        }
        // The duplicated slot is the only stdout descriptor the new image
        // should observe.
        let _ = close(fd);
    }

    let _ = execv(&c_argv[0], c_argv);
    child_fail(b"execkit: failed to replace process image\n")
}

/// Raw stderr write plus `_exit`: no atexit handlers, no destructors.
fn child_fail(msg: &[u8]) -> ! {
    unsafe {
        libc::write(libc::STDERR_FILENO, msg.as_ptr().cast(), msg.len());
        libc::_exit(libc::EXIT_FAILURE);
    }
}

fn wait_and_classify(child: Pid) -> ExecResult<ExitOutcome> {
    match waitpid(child, None) {
        Ok(WaitStatus::Exited(_, code)) => Ok(ExitOutcome::Exited(code)),
        Ok(WaitStatus::Signaled(_, signal, _)) => Ok(ExitOutcome::Signaled(signal as i32)),
        // Only reachable with wait flags this layer never passes.
        Ok(status) => Err(ExecError::wait_failed(
            child.as_raw(),
            format!("unexpected wait status: {:?}", status),
        )),
        // The child, if still alive, is left unreaped; the failure is
        // reported and no recovery is attempted.
        Err(errno) => Err(ExecError::wait_failed(child.as_raw(), errno.to_string())),
    }
}
