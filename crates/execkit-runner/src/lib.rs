//! # Execkit Runner
//!
//! Low-level process execution for the execkit toolkit.
//!
//! This crate provides synchronous, single-child primitives:
//! - Delegating a command line to the platform shell
//! - Direct execution of an argument vector (fork + execv + waitpid)
//! - Direct execution with stdout redirected to a file
//! - Input validation before any process is created
//!
//! Each operation manages exactly one child process and reaps it before
//! returning. No handles, descriptors, or state survive a call.

pub mod execute;
pub mod shell;
pub mod validation;

// Re-export main operations
pub use execute::*;
pub use shell::*;
pub use validation::*;
