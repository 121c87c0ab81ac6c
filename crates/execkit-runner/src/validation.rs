//! Input validation for runner operations.
//!
//! All rules here are checked before any process is created; a violation
//! means the call fails with no side effect.

use execkit_common::{ExecError, ExecResult};

/// Validate an argument vector for direct execution.
///
/// The vector must be non-empty and its first element must be an absolute
/// path: `execv` performs no path lookup, so a relative first element could
/// never resolve the way callers expect.
pub fn validate_argv(argv: &[String]) -> ExecResult<()> {
    let program = argv
        .first()
        .ok_or_else(|| ExecError::invalid_command("argument vector is empty"))?;

    if !program.starts_with('/') {
        return Err(ExecError::invalid_command(format!(
            "executable path is not absolute: {}",
            program
        )));
    }

    Ok(())
}
