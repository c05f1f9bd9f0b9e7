//! Options module
//!
//! The switches and overrides that may precede the mode token

pub mod flags;
pub mod opts;

pub use flags::*;
pub use opts::*;
