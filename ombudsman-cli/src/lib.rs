//! # ombudsman-cli
//!
//! CLI for the ombudsman desk: argument parsing, config loading, command handlers and
//! text rendering. The `ombud` binary wires them together.

pub mod cli;
pub mod commands;
pub mod config;
pub mod render;


pub use cli::{load_config, Cli, Commands};
pub use commands::ListQuery;
pub use config::DeskConfig;
