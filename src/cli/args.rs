//! Classification of the raw command line into a single [`Command`]
//!
//! Arguments are scanned once, left to right. Options before the mode token
//! are folded into an [`Options`] value; the mode token (`-M`, `-X`, `-T` or
//! `--`) ends the scan and everything after it is passed through verbatim.

use crate::cli::{Command, Launch};
use crate::config::Settings;
use crate::error::ArgError;
use crate::options::{Flags, Options};
use crate::system::System;
use tracing::{debug, trace};

/// Tokens PowerShell produces when it splits `-X:alias` in two
const SPLIT_COLON_TOKENS: [&str; 4] = ["-M:", "-X:", "-T:", "-A:"];

/// Prefixes of options removed from the Clojure CLI
const REMOVED_PREFIXES: [&str; 3] = ["-R", "-C", "-O"];

/// Warning shown for `-J` options
pub const JVM_OPTS_WARNING: &str = "platform does not support -J options; option ignored";

/// Warning shown for `-Spom`
pub const POM_WARNING: &str = "platform does not support POM generation; no pom.xml will be written";

/// Parse a command line with the given settings
///
/// Warnings for ignored options are written to `system`; everything else is
/// reported through the returned command.
#[inline]
pub fn parse_args<S: AsRef<str>>(args: &[S], settings: &Settings, system: &dyn System) -> Command {
    ArgParser::new(settings, system).parse(args)
}

/// Command-line classifier
///
/// Holds no state between calls; the same parser can classify any number
/// of command lines.
#[derive(Clone, Copy)]
pub struct ArgParser<'a> {
    system: &'a dyn System,
    join_split_colon_args: bool,
}

impl<'a> ArgParser<'a> {
    /// Create a parser configured from `settings`
    #[must_use]
    #[inline]
    pub const fn new(settings: &Settings, system: &'a dyn System) -> Self {
        Self::with_colon_join(settings.join_split_colon_args, system)
    }

    /// Create a parser with the colon re-joining workaround explicitly on or off
    #[must_use]
    #[inline]
    pub const fn with_colon_join(join_split_colon_args: bool, system: &'a dyn System) -> Self {
        return Self {
            system,
            join_split_colon_args,
        };
    }

    /// Classify `args`, producing exactly one command
    #[inline]
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Command {
        let command = self.classify(args).unwrap_or_else(|err| {
            return Command::Error {
                exit_code: err.exit_code(),
                message: err.to_string(),
            };
        });
        debug!(mode = command.mode(), "Parsed command line");
        command
    }

    fn classify<S: AsRef<str>>(&self, args: &[S]) -> Result<Command, ArgError> {
        let mut opts = Options::new();
        let mut i = 0;

        while i < args.len() {
            let mut arg = args[i].as_ref().to_owned();
            i += 1;

            if self.join_split_colon_args && SPLIT_COLON_TOKENS.contains(&arg.as_str()) {
                let next = args.get(i).ok_or_else(|| ArgError::missing_value(&arg))?;
                arg.push_str(next.as_ref());
                i += 1;
            }
            trace!(%arg, "Examining argument");

            if REMOVED_PREFIXES.iter().any(|prefix| arg.starts_with(prefix)) {
                return Err(ArgError::removed(&arg));
            }

            match arg.as_str() {
                "-Sresolve-tags" => return Err(ArgError::ResolveTags),
                "-version" | "--version" => return Ok(Command::Version),
                "-h" | "--help" => return Ok(Command::Help),
                "-P" => {
                    opts = opts.with_flag(Flags::PREP);
                    continue;
                }
                "-A" => return Err(ArgError::MissingAlias),
                "--" => return Ok(Command::Repl(Launch::new(opts, None, rest(args, i)))),
                _ => {}
            }

            if arg.starts_with("-J") {
                self.system.warn(&format!("{JVM_OPTS_WARNING}: {arg}"));
                continue;
            }

            if let Some(setting) = arg.strip_prefix("-S") {
                opts = self.apply_setting(opts, &arg, setting, args, &mut i)?;
                continue;
            }

            if let Some(aliases) = arg.strip_prefix("-A") {
                opts = opts.with_repl_alias(aliases);
                continue;
            }

            if let Some(aliases) = arg.strip_prefix("-M") {
                let launch = Launch::new(opts, non_empty(aliases), rest(args, i));
                return Ok(Command::Main(launch));
            }

            if let Some(aliases) = arg.strip_prefix("-X") {
                let launch = Launch::new(opts, non_empty(aliases), rest(args, i));
                return Ok(Command::Exec(launch));
            }

            if let Some(suffix) = arg.strip_prefix("-T") {
                let (tool_name, command_aliases) = if suffix.starts_with(':') {
                    (None, Some(suffix.to_owned()))
                } else {
                    (non_empty(suffix), None)
                };
                let launch = Launch::new(opts, command_aliases, rest(args, i));
                return Ok(Command::Tool { tool_name, launch });
            }

            debug!(%arg, "Skipping unrecognised argument");
        }

        Ok(Command::Repl(Launch::new(opts, None, Vec::new())))
    }

    /// Apply one `-S` option; `token` is the whole argument, `name` its suffix
    fn apply_setting<S: AsRef<str>>(
        &self,
        opts: Options,
        token: &str,
        name: &str,
        args: &[S],
        i: &mut usize,
    ) -> Result<Options, ArgError> {
        match name {
            "deps" => Ok(opts.with_deps(take_value(token, args, i)?)),
            "cp" => Ok(opts.with_classpath(take_value(token, args, i)?)),
            "threads" => {
                let value = take_value(token, args, i)?;
                let threads = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| ArgError::non_integer(token))?;
                Ok(opts.with_threads(threads))
            }
            "pom" => {
                self.system.warn(POM_WARNING);
                Ok(opts.with_flag(Flags::POM))
            }
            _ => Flags::from_setting(name)
                .map(|flag| opts.with_flag(flag))
                .ok_or_else(|| ArgError::unknown(token)),
        }
    }
}

/// Consume the value following `token`
fn take_value<S: AsRef<str>>(token: &str, args: &[S], i: &mut usize) -> Result<String, ArgError> {
    let value = args
        .get(*i)
        .ok_or_else(|| ArgError::missing_value(token))?;
    *i += 1;
    Ok(value.as_ref().to_owned())
}

fn rest<S: AsRef<str>>(args: &[S], from: usize) -> Vec<String> {
    args.get(from..)
        .unwrap_or_default()
        .iter()
        .map(|arg| arg.as_ref().to_owned())
        .collect()
}

fn non_empty(aliases: &str) -> Option<String> {
    (!aliases.is_empty()).then(|| aliases.to_owned())
}
