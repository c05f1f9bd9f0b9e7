//! `cljr` - argument parser and dispatcher for the Clojure CLI grammar
//!
//! This library classifies a `clj`/`clojure` style command line into a single
//! [`cli::Command`]: help, version, an error, or one of the launch modes
//! (REPL, `-M` main, `-X` exec, `-T` tool) together with the options that
//! preceded the mode token.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod options;
pub mod system;

use anyhow::Result;
use cli::ArgParser;
use config::Settings;
use operations::hand_off;
use system::System;

/// Main entry point for the cljr library
///
/// Parses `args`, runs short-circuit commands directly and hands launch
/// commands off. Returns the process exit code.
///
/// # Errors
///
/// Returns an error if:
/// - A launch command cannot be handed off
#[inline]
pub fn run<S: AsRef<str>>(args: &[S], settings: &Settings, system: &dyn System) -> Result<i32> {
    let command = ArgParser::new(settings, system).parse(args);

    if let Some(exit_code) = command.execute(system) {
        return Ok(exit_code);
    }

    Ok(hand_off(&command, system)?)
}
