//! Shared helpers for the runner end-to-end tests.

/// Absolute path to the helper binary built from `src/bin/testexe.rs`.
pub fn testexe() -> String {
    env!("CARGO_BIN_EXE_testexe").to_string()
}

/// Build an owned argument vector from string literals.
pub fn argv(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
