//! Direct execution: exit-code classification, missing programs, signals.

mod common;

use common::{argv, testexe};
use execkit_runner::{run_directly, run_directly_redirected};

#[test]
fn test_zero_exit_reports_success() {
    assert!(run_directly(&argv(&[&testexe()])));
}

#[test]
fn test_nonzero_exit_reports_failure() {
    assert!(!run_directly(&argv(&[&testexe(), "--exit-code", "1"])));
}

#[test]
fn test_missing_absolute_program_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-program");
    let missing = missing.to_str().unwrap();

    assert!(!run_directly(&argv(&[missing])));

    let out = dir.path().join("out.txt");
    assert!(!run_directly_redirected(Some(&out), &argv(&[missing])));
}

#[test]
fn test_signaled_child_reports_failure() {
    // The child kills itself; abnormal termination is never success.
    assert!(!run_directly(&argv(&["/bin/sh", "-c", "kill -9 $$"])));
}
