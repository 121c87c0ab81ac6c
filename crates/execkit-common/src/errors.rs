//! Error types for the execkit toolkit.

use thiserror::Error;

/// Result type alias for runner operations.
pub type ExecResult<T> = std::result::Result<T, ExecError>;

/// Errors the runner can observe from the parent side of a call.
///
/// Child-side setup failures (redirection open, descriptor duplication,
/// image replacement) are deliberately not variants here: they happen after
/// the fork and can only be observed by the parent as the child's failure
/// exit status.
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// Input rejected before any process was created.
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    /// The OS could not create the child process.
    #[error("Spawn failed for {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The wait on an already-created child failed. The child may remain
    /// unreaped; this layer makes no attempt to recover it.
    #[error("Wait failed for pid {pid}: {reason}")]
    WaitFailed { pid: i32, reason: String },
}

impl ExecError {
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            reason: reason.into(),
        }
    }

    pub fn wait_failed(pid: i32, reason: impl Into<String>) -> Self {
        Self::WaitFailed {
            pid,
            reason: reason.into(),
        }
    }
}
