//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `check` - Validate the deployment environment
//! - `show` - Print the effective configuration

pub mod args;

pub use args::{Cli, Commands};
