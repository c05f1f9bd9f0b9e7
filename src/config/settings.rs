//! Settings read from the environment

use crate::error::CljrError;
use crate::system::System;
use tracing::debug;

/// Forces the colon re-joining workaround on or off
pub const SPLIT_COLON_ARGS_VAR: &str = "CLJR_SPLIT_COLON_ARGS";

/// Default tracing filter when `RUST_LOG` is unset
pub const LOG_VAR: &str = "CLJR_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings for a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Re-join `-M:`, `-X:`, `-T:` and `-A:` with the token after them
    pub join_split_colon_args: bool,

    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Settings {
    /// Settings for a host, with no environment overrides applied
    #[must_use]
    #[inline]
    pub fn for_platform(windows: bool) -> Self {
        Self {
            join_split_colon_args: windows,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }

    /// Load settings from the environment of `system`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `CLJR_SPLIT_COLON_ARGS` is set to something other than a boolean
    #[inline]
    pub fn load(system: &dyn System) -> Result<Self, CljrError> {
        let mut settings = Self::for_platform(system.is_windows());

        if let Ok(value) = system.env_var(SPLIT_COLON_ARGS_VAR) {
            settings.join_split_colon_args = parse_bool(&value).ok_or_else(|| {
                return CljrError::configuration(format!(
                    "{SPLIT_COLON_ARGS_VAR} must be a boolean, got '{value}'"
                ));
            })?;
        }

        if let Ok(filter) = system.env_var(LOG_VAR)
            && !filter.trim().is_empty()
        {
            settings.log_filter = filter;
        }

        debug!(?settings, "Loaded settings");
        Ok(settings)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
