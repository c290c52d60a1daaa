//! Application-wide constants
//!
//! Centralized location for fixed settings and magic values.

// =============================================================================
// Env File
// =============================================================================

/// Project-relative env file loaded before the process environment is read
pub const DEFAULT_ENV_FILE: &str = "env_manager/.env";

/// Environment variable overriding the env file location
pub const ENV_PATH_VAR: &str = "ENV_PATH";

// =============================================================================
// Security
// =============================================================================

/// Minimum recommended secret key length
pub const MIN_SECRET_KEY_LENGTH: usize = 32;

/// Placeholder shown in place of secret values
pub const REDACTED: &str = "[REDACTED]";

// =============================================================================
// Server
// =============================================================================

/// Framework debug flag (fixed, not read from the environment)
pub const SERVER_DEBUG: bool = true;

/// Whether the framework appends a trailing slash to unmatched routes
pub const SERVER_APPEND_SLASH: bool = true;

// =============================================================================
// CORS
// =============================================================================

/// Allow cross-origin requests from any origin
pub const CORS_ALLOW_ALL_ORIGINS: bool = true;

/// Forward credentials on cross-origin requests
pub const CORS_ALLOW_CREDENTIALS: bool = false;

// =============================================================================
// Database
// =============================================================================

/// Default postgres port when DB_PORT is not set
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

// =============================================================================
// Cache (Redis)
// =============================================================================

/// Default Redis port when REDIS_PORT is not set
pub const DEFAULT_REDIS_PORT: u16 = 6379;

// =============================================================================
// Localization
// =============================================================================

/// Default language code
pub const LANGUAGE_CODE: &str = "en-us";

/// Timestamps are stored and rendered in this zone
pub const TIME_ZONE: &str = "UTC";
