//! Shell-delegated execution: exit-code mapping and shell semantics.

use execkit_runner::run_via_shell;

#[test]
fn test_true_and_false() {
    assert!(run_via_shell(Some("true")));
    assert!(!run_via_shell(Some("false")));
    assert!(!run_via_shell(None));
}

#[test]
fn test_shell_semantics_are_available() {
    // Redirection syntax is interpreted here, unlike the direct operations.
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");

    let cmd = format!("echo shell > {}", out.display());
    assert!(run_via_shell(Some(&cmd)));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "shell\n");
}

#[test]
fn test_missing_command_fails_through_the_shell() {
    assert!(!run_via_shell(Some("/no/such/program")));
}
