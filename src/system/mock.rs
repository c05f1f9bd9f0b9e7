//! Mock system implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::System;
use std::collections::HashMap;
use std::env::VarError;
use std::io;
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` keeps its environment in memory and records every line
/// written to stdout or stderr, so tests can assert on warnings without
/// redirecting the process streams.
///
/// # Example
/// ```
/// use cljr::system::{mock::MockSystem, System};
///
/// let system = MockSystem::new()
///     .with_env("CLJR_LOG", "debug").unwrap()
///     .with_windows(true).unwrap();
///
/// system.warn("careful");
///
/// assert_eq!(system.env_var("CLJR_LOG").unwrap(), "debug");
/// assert!(system.is_windows());
/// assert_eq!(system.stderr_lines(), vec!["careful".to_owned()]);
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    env_vars: HashMap<String, String>,
    windows: bool,
    stdout: Vec<String>,
    stderr: Vec<String>,
}

impl MockSystem {
    /// Create a new `MockSystem` with an empty environment on a non-Windows host
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                env_vars: HashMap::new(),
                windows: false,
                stdout: Vec::new(),
                stderr: Vec::new(),
            })),
        }
    }

    /// Set an environment variable (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_env(self, key: &str, value: &str) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.env_vars.insert(key.to_owned(), value.to_owned());
        drop(state);
        Ok(self)
    }

    /// Pretend to run on Windows or not (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state lock is poisoned
    #[inline]
    pub fn with_windows(self, windows: bool) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.windows = windows;
        drop(state);
        Ok(self)
    }

    /// Lines written to stdout so far
    #[must_use]
    #[inline]
    pub fn stdout_lines(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.stdout.clone())
            .unwrap_or_default()
    }

    /// Lines written to stderr so far
    #[must_use]
    #[inline]
    pub fn stderr_lines(&self) -> Vec<String> {
        self.state
            .read()
            .map(|state| state.stderr.clone())
            .unwrap_or_default()
    }

    /// Everything written to stdout, joined with newlines
    #[must_use]
    #[inline]
    pub fn stdout(&self) -> String {
        self.stdout_lines().join("\n")
    }

    /// Everything written to stderr, joined with newlines
    #[must_use]
    #[inline]
    pub fn stderr(&self) -> String {
        self.stderr_lines().join("\n")
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    #[expect(clippy::map_err_ignore, reason = "This is for VarError")]
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state.read().map_err(|_| VarError::NotPresent)?;
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[inline]
    fn is_windows(&self) -> bool {
        self.state.read().is_ok_and(|state| state.windows)
    }

    #[inline]
    fn print(&self, line: &str) {
        if let Ok(mut state) = self.state.write() {
            state.stdout.push(line.to_owned());
        }
    }

    #[inline]
    fn warn(&self, line: &str) {
        if let Ok(mut state) = self.state.write() {
            state.stderr.push(line.to_owned());
        }
    }
}
