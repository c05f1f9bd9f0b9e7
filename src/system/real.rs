//! Real system implementation using `std::env` and the process streams

use super::System;
use std::env::VarError;

/// Production implementation of System trait
///
/// Delegates to the standard library's environment functions and writes
/// straight to the process's stdout and stderr.
#[derive(Debug, Clone, Copy)]
pub struct RealSystem;

impl RealSystem {
    /// Create a new `RealSystem` instance
    #[must_use]
    pub const fn new() -> Self {
        return Self;
    }
}

impl Default for RealSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for RealSystem {
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        std::env::var(key)
    }

    fn is_windows(&self) -> bool {
        cfg!(windows)
    }

    fn print(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, line: &str) {
        eprintln!("{line}");
    }
}
