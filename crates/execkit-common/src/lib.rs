//! # Execkit Common
//!
//! Shared types for the execkit toolkit:
//! - Error types and the `ExecResult` alias
//! - Exit-outcome classification for finished child processes

pub mod errors;
pub mod types;

// Re-export main types
pub use errors::*;
pub use types::*;
