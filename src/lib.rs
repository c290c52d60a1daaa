//! Lola Config - Environment-driven configuration for the Lola backend
//!
//! This crate turns the deployment environment (an env file plus process
//! environment variables) into an explicit, immutable [`Settings`] record,
//! validated at startup. The framework runtime that consumes the record
//! (web server, task queue, object-storage SDK) lives elsewhere; this crate
//! only produces the record and ships a small CLI for operators.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Settings record, registries, env file convention, constants
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Validate a deployment environment
//! cargo run -- check
//!
//! # Dump the effective configuration, secrets redacted
//! cargo run -- show --format json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use config::{registry, Settings};
pub use errors::{ConfigError, ConfigResult};
