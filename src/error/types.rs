//! Custom error types with exit codes

use thiserror::Error;

/// Failure while classifying the command line
///
/// The `Display` text of each variant is the exact message shown to the
/// user when the corresponding `Command::Error` is executed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgError {
    /// `-R`, `-C` and `-O` were removed from the Clojure CLI
    #[error("{prefix} is no longer supported, use -A with repl, -M for main, -X for exec, -T for tool")]
    Removed { prefix: String },

    /// `-Sresolve-tags` moved to the `:deps` tool
    #[error("Option changed, use: clj -X:deps git-resolve-tags")]
    ResolveTags,

    /// An option that takes a value was the last token
    #[error("Invalid arguments, no value following {token}.")]
    MissingValue { token: String },

    /// `-Sthreads` was followed by something that is not an integer
    #[error("Invalid argument, non-integer following {token}")]
    NonInteger { token: String },

    /// Unrecognised `-S` option
    #[error("Unknown command line argument: {token}")]
    Unknown { token: String },

    /// `-A` without any aliases attached
    #[error("-A requires an alias")]
    MissingAlias,
}

impl ArgError {
    /// Get the process exit code for this error
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Removed { .. }
            | Self::ResolveTags
            | Self::MissingValue { .. }
            | Self::NonInteger { .. }
            | Self::Unknown { .. }
            | Self::MissingAlias => 1,
        }
    }

    /// Create a removed-option error from the offending token
    #[inline]
    pub fn removed(token: &str) -> Self {
        Self::Removed {
            prefix: token.chars().take(2).collect(),
        }
    }

    /// Create a missing-value error
    #[inline]
    pub fn missing_value<S: Into<String>>(token: S) -> Self {
        Self::MissingValue {
            token: token.into(),
        }
    }

    /// Create a non-integer error
    #[inline]
    pub fn non_integer<S: Into<String>>(token: S) -> Self {
        Self::NonInteger {
            token: token.into(),
        }
    }

    /// Create an unknown-argument error
    #[inline]
    pub fn unknown<S: Into<String>>(token: S) -> Self {
        Self::Unknown {
            token: token.into(),
        }
    }
}

/// Errors raised outside of argument classification
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CljrError {
    /// Configuration Error - invalid environment settings
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Output Error - a command descriptor could not be rendered
    #[error("Output error: {message}")]
    Output { message: String },
}

impl CljrError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Output { .. } => 2,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an output error
    #[inline]
    pub fn output<S: Into<String>>(message: S) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_names_two_character_prefix() {
        let err = ArgError::removed("-Rthing");
        assert_eq!(
            err.to_string(),
            "-R is no longer supported, use -A with repl, -M for main, -X for exec, -T for tool"
        );
    }

    #[test]
    fn value_errors_name_the_token() {
        assert_eq!(
            ArgError::missing_value("-Sdeps").to_string(),
            "Invalid arguments, no value following -Sdeps."
        );
        assert_eq!(
            ArgError::non_integer("-Sthreads").to_string(),
            "Invalid argument, non-integer following -Sthreads"
        );
        assert_eq!(
            ArgError::unknown("-Swhat!").to_string(),
            "Unknown command line argument: -Swhat!"
        );
    }

    #[test]
    fn every_argument_error_exits_with_one() {
        let errors = [
            ArgError::removed("-Cx"),
            ArgError::ResolveTags,
            ArgError::missing_value("-Scp"),
            ArgError::non_integer("-Sthreads"),
            ArgError::unknown("-S"),
            ArgError::MissingAlias,
        ];
        assert!(errors.iter().all(|err| err.exit_code() == 1));
    }

    #[test]
    fn cljr_error_exit_codes() {
        assert_eq!(CljrError::configuration("bad").exit_code(), 1);
        assert_eq!(CljrError::output("bad").exit_code(), 2);
    }
}
