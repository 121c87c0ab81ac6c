//! Core domain types for the execkit toolkit.

use std::fmt;

/// How a finished child process terminated.
///
/// A call that produced an `ExitOutcome` has fully reaped its child; no
/// handle to the process survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// The process exited normally with the given code.
    Exited(i32),
    /// The process was terminated by the given signal number.
    Signaled(i32),
}

impl ExitOutcome {
    /// Returns true iff the process exited normally with code 0.
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exited with code {}", code),
            ExitOutcome::Signaled(sig) => write!(f, "terminated by signal {}", sig),
        }
    }
}
