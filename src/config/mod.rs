//! Application configuration module
//!
//! Handles the env file convention, environment variables, component
//! registries, and application-wide constants.

mod constants;
pub mod env_file;
pub mod registry;
mod settings;

pub use constants::*;
pub use settings::{
    BrokerSettings, BucketSettings, CorsSettings, DatabaseSettings, EmailSettings, RedisSettings,
    SecuritySettings, ServerSettings, Settings,
};
