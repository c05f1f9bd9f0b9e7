//! Configuration management module
//!
//! Settings come from the environment only; there are no config files

pub mod settings;

pub use settings::*;
