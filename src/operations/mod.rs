//! Operations module
//!
//! What happens to a launch command once parsing is done

pub mod describe;
pub mod handoff;

pub use describe::*;
pub use handoff::*;
