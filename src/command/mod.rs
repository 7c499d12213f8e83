//! Command tokens, resolution, and ordered execution.
//!
//! - [`Args`] — Command-line surface
//! - [`Command`] — `setup` or `clean`, expanded over every view
//! - [`Plan`] — Validated commands, run strictly in order
mod args;
mod command;
mod plan;

pub use args::*;
pub use command::*;
pub use plan::*;
