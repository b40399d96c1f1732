//! CLI module
//!
//! Command-line interface for running loads.
//!
//! # Modes
//!
//! - `full` - Reload all history for every resource
//! - `incremental` - Reload yesterday for every resource
//!
//! Both modes take the warehouse staging location as the second argument.

mod commands;
mod runner;

pub use commands::{Cli, ModeArg};
pub use runner::Runner;
