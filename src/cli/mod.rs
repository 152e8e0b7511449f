//! CLI command implementations
//!
//! - `simple`: pricing commands (quote, check)
//! - `config`: rate card and schema commands
//! - `util`: shared argument helpers

pub mod config;
pub mod simple;
pub mod util;

pub use config::{cmd_rates, cmd_schema};
pub use simple::{cmd_check, cmd_quote};
