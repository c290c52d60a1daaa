//! Check command - Validates the deployment environment.
//!
//! The hard validation already happened in `Settings::load`; this command
//! reports section-by-section what the environment provides, and in strict
//! mode fails on unconfigured sections.

use crate::cli::args::CheckArgs;
use crate::config::Settings;
use crate::errors::{ConfigError, ConfigResult};

/// Execute the check command
pub fn execute(args: CheckArgs, settings: Settings) -> ConfigResult<()> {
    tracing::info!(
        "Allowed hosts: {}",
        settings.server.allowed_hosts.join(", ")
    );

    report("database", settings.database.url().is_some(), args.strict)?;
    report("broker", settings.broker.url.is_some(), args.strict)?;
    report("redis", settings.redis.url().is_some(), args.strict)?;
    report("email", settings.email.is_configured(), args.strict)?;
    report("bucket", settings.bucket.is_configured(), args.strict)?;

    if settings.security.password_reset_endpoint.is_none() {
        tracing::warn!("PASSWORD_RESET_ENDPOINT not set; reset emails will have no link target");
    }
    if settings.security.token_ttl_seconds.is_none() {
        tracing::warn!("DURATION not set; reset tokens will not expire");
    }

    tracing::info!("Configuration OK");
    Ok(())
}

fn report(section: &'static str, configured: bool, strict: bool) -> ConfigResult<()> {
    if configured {
        tracing::info!("{} configured", section);
        Ok(())
    } else if strict {
        Err(ConfigError::NotConfigured(section))
    } else {
        tracing::warn!("{} not configured", section);
        Ok(())
    }
}
