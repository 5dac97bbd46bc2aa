//! CLI, configuration, listing output and calendar actions
//!
//! This crate provides the `eventboard` command-line interface.

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
