//! Command-line interface module
//!
//! Handles argument classification and the commands it produces

pub mod args;
pub mod commands;
pub mod help;

pub use args::*;
pub use commands::*;
