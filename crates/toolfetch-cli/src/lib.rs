//! `toolfetch` command-line driver.
//!
//! Runs the dashboard headless against a replay backend and prints what
//! the window would show.
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tokio_test as _;

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use parser::{Cli, Commands};
