#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by the binary in main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod options;
pub mod parser;

#[cfg(test)]
mod test_utils;

// Re-export primary types for convenient access
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use options::{BindingArgs, OverrideArgs};
pub use parser::Cli;
