//! System abstraction for environment and console operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing the parser and the short-circuit commands to be tested with a
//! mock implementation that captures everything they print.

use std::env::VarError;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (environment + console)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and the process streams
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Whether the host is Windows, where PowerShell splits `-X:foo` into
    /// `-X:` and `foo`
    fn is_windows(&self) -> bool;

    // ==================== Console Operations ====================

    /// Write a line to standard output
    fn print(&self, line: &str);

    /// Write a line to the diagnostic stream (standard error)
    fn warn(&self, line: &str);
}
