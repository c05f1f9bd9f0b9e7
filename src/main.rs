//! # `cljr`
//!
//! `cljr` reads a `clj`/`clojure` style command line and decides what it asks
//! for: help, the version, or one of the launch modes.
//!
//! ## Usage
//!
//! ```sh
//! cljr -Srepro -A:dev -X:deps tree
//! cljr -Sdescribe -M:test -m my.app
//! ```
//!
//! Help, version and argument errors are handled directly. Launch modes are
//! handed off as a JSON descriptor on stdout (or EDN with `-Sdescribe`).
//!
//! ## Environment
//! - `CLJR_SPLIT_COLON_ARGS`: force re-joining of `-X:` `alias` pairs on or off
//! - `CLJR_LOG`: log filter used when `RUST_LOG` is unset

use anyhow::Result;
use cljr::config::Settings;
use cljr::error::CljrError;
use cljr::system::real::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let system = RealSystem::new();
    let settings = Settings::load(&system).unwrap_or_else(|err| {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    });

    // RUST_LOG wins over CLJR_LOG; stdout is reserved for command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    match cljr::run(&args, &settings, &system) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<CljrError>()
                    .map_or(1, CljrError::exit_code),
            );
        }
    }
}
