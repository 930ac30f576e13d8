//! This library is there to share some common code amongst all adsbx tools.
//!

mod config;
mod daterange;
mod logging;
mod macros;

pub use config::*;
pub use daterange::*;
pub use logging::*;
