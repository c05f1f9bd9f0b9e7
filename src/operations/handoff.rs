//! Hand-off of launch commands to the execution backend
//!
//! Dependency resolution and process launching live outside this crate. A
//! launch command is handed over as a JSON descriptor on stdout, or, with
//! `-Sdescribe`, reported as EDN instead.

use crate::cli::{Command, help};
use crate::error::CljrError;
use crate::operations::describe::describe;
use crate::options::Flags;
use crate::system::System;
use tracing::{debug, info};

/// Hand a launch command to the backend, returning the exit code
///
/// # Errors
///
/// Returns an error if:
/// - `command` is a short-circuit command
/// - The command cannot be serialized
#[inline]
pub fn hand_off(command: &Command, system: &dyn System) -> Result<i32, CljrError> {
    let Some(launch) = command.launch() else {
        return Err(CljrError::output(format!(
            "{} is not a launch command",
            command.mode()
        )));
    };

    if launch.options.has_flag(Flags::VERBOSE) {
        for line in verbose_report(command) {
            system.warn(&line);
        }
    }

    if launch.options.has_flag(Flags::DESCRIBE)
        && let Some(description) = describe(command)
    {
        debug!(mode = command.mode(), "Describing command instead of launching");
        system.print(&description);
        return Ok(0);
    }

    let descriptor = to_json(command)?;
    info!(mode = command.mode(), args = launch.args.len(), "Handing off command");
    system.print(&descriptor);
    Ok(0)
}

/// Serialize a command as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if:
/// - The command cannot be serialized to JSON
#[inline]
pub fn to_json(command: &Command) -> Result<String, CljrError> {
    serde_json::to_string_pretty(command)
        .map_err(|e| CljrError::output(format!("Failed to serialize to JSON: {e}")))
}

/// `key = value` lines printed for `-Sverbose`
fn verbose_report(command: &Command) -> Vec<String> {
    let repl_aliases = command
        .options()
        .map(|opts| opts.repl_aliases().concat())
        .unwrap_or_default();

    vec![
        format!("version = {}", help::version()),
        format!("mode = {}", command.mode()),
        format!("command_aliases = {}", command.command_aliases().unwrap_or_default()),
        format!("repl_aliases = {repl_aliases}"),
    ]
}
