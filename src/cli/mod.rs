//! CLI command implementations
//!
//! - `solve`: run the minimizer and print traces or JSON
//! - `config`: configuration and schema commands
//! - `util`: shared argument and output helpers

pub mod config;
pub mod solve;
pub mod util;

pub use config::{cmd_config, cmd_schema};
pub use solve::cmd_solve;
