//! Invalid inputs are rejected before any process is created.
//!
//! "No child was created" is observed through the absence of side effects:
//! a rejected redirected call must never create its output file.

mod common;

use common::{argv, testexe};
use execkit_runner::{run_directly, run_directly_redirected, run_via_shell};

#[test]
fn test_absent_inputs_are_rejected() {
    assert!(!run_via_shell(None));
    assert!(!run_directly(&[]));
    assert!(!run_directly_redirected(None, &argv(&[&testexe()])));
}

#[test]
fn test_empty_argv_creates_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.txt");

    assert!(!run_directly_redirected(Some(&out), &[]));
    assert!(!out.exists());
}

#[test]
fn test_relative_program_creates_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.txt");

    assert!(!run_directly(&argv(&["testexe", "--exit-code", "0"])));
    assert!(!run_directly_redirected(
        Some(&out),
        &argv(&["testexe", "--exit-code", "0"]),
    ));
    assert!(!out.exists());
}
