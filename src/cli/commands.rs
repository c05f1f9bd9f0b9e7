//! The command produced by parsing a command line

use crate::cli::help;
use crate::options::Options;
use crate::system::System;
use serde::Serialize;

/// Options, aliases and trailing arguments shared by every launch mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Launch {
    /// Options collected before the mode token
    pub options: Options,

    /// Aliases attached to the mode token, e.g. `:A:B` from `-X:A:B`
    pub command_aliases: Option<String>,

    /// Everything after the mode token, untouched
    pub args: Vec<String>,
}

impl Launch {
    #[must_use]
    #[inline]
    pub const fn new(options: Options, command_aliases: Option<String>, args: Vec<String>) -> Self {
        return Self {
            options,
            command_aliases,
            args,
        };
    }
}

/// The outcome of parsing a command line
///
/// `Help`, `Version` and `Error` are resolved on the spot by [`Command::execute`];
/// the launch modes are handed to the execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
#[non_exhaustive]
pub enum Command {
    Help,
    Version,
    Error {
        exit_code: i32,
        message: String,
    },
    /// Start a REPL (`--`, end of input, or an unrecognised token)
    Repl(Launch),
    /// Run `clojure.main` (`-M`)
    Main(Launch),
    /// Execute a function (`-X`)
    Exec(Launch),
    /// Run a tool (`-T`); `tool_name` and `launch.command_aliases` are never both set
    Tool {
        tool_name: Option<String>,
        #[serde(flatten)]
        launch: Launch,
    },
}

impl Command {
    /// Short name of the mode, as used in describe output
    #[must_use]
    #[inline]
    pub const fn mode(&self) -> &'static str {
        match *self {
            Self::Help => "help",
            Self::Version => "version",
            Self::Error { .. } => "error",
            Self::Repl(_) => "repl",
            Self::Main(_) => "main",
            Self::Exec(_) => "exec",
            Self::Tool { .. } => "tool",
        }
    }

    /// The launch payload, if this is a launch mode
    #[must_use]
    #[inline]
    pub const fn launch(&self) -> Option<&Launch> {
        match *self {
            Self::Repl(ref launch)
            | Self::Main(ref launch)
            | Self::Exec(ref launch)
            | Self::Tool { ref launch, .. } => Some(launch),
            Self::Help | Self::Version | Self::Error { .. } => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn options(&self) -> Option<&Options> {
        self.launch().map(|launch| &launch.options)
    }

    #[must_use]
    #[inline]
    pub fn command_aliases(&self) -> Option<&str> {
        self.launch()
            .and_then(|launch| launch.command_aliases.as_deref())
    }

    /// Arguments after the mode token; empty for short-circuit commands
    #[must_use]
    #[inline]
    pub fn args(&self) -> &[String] {
        self.launch()
            .map(|launch| launch.args.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    #[inline]
    pub fn tool_name(&self) -> Option<&str> {
        match *self {
            Self::Tool { ref tool_name, .. } => tool_name.as_deref(),
            _ => None,
        }
    }

    /// Whether the command is fully handled by [`Command::execute`]
    #[must_use]
    #[inline]
    pub const fn is_short_circuit(&self) -> bool {
        self.launch().is_none()
    }

    /// Run a short-circuit command, returning its exit code
    ///
    /// Help and version text go to stdout, error messages to the diagnostic
    /// stream. Launch commands return `None` and print nothing.
    #[inline]
    pub fn execute(&self, system: &dyn System) -> Option<i32> {
        match *self {
            Self::Help => {
                system.print(&help::help_text());
                Some(0)
            }
            Self::Version => {
                system.print(&help::version_text());
                Some(0)
            }
            Self::Error {
                exit_code,
                ref message,
            } => {
                system.warn(message);
                Some(exit_code)
            }
            Self::Repl(_) | Self::Main(_) | Self::Exec(_) | Self::Tool { .. } => None,
        }
    }
}
