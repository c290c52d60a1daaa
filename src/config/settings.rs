//! Application settings loaded from environment variables.

use std::env;
use std::path::Path;

use serde::Serialize;

use super::constants::{
    CORS_ALLOW_ALL_ORIGINS, CORS_ALLOW_CREDENTIALS, DEFAULT_POSTGRES_PORT, DEFAULT_REDIS_PORT,
    MIN_SECRET_KEY_LENGTH, REDACTED, SERVER_APPEND_SLASH, SERVER_DEBUG,
};
use super::{env_file, registry};
use crate::errors::{ConfigError, ConfigResult};

/// The full configuration record.
///
/// Built once at process start and passed by reference to whatever consumes
/// it; nothing here is global or mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub security: SecuritySettings,
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub broker: BrokerSettings,
    pub redis: RedisSettings,
    pub email: EmailSettings,
    pub bucket: BucketSettings,
    pub cors: CorsSettings,
}

/// Keys and secrets used for signing and encryption.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SecuritySettings {
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
    #[serde(skip_serializing)]
    pub crypt_key: Option<String>,
    /// Reset-token lifetime in seconds (env `DURATION`)
    pub token_ttl_seconds: Option<u64>,
    /// URL the password-reset email points the user at
    pub password_reset_endpoint: Option<String>,
}

impl std::fmt::Debug for SecuritySettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecuritySettings")
            .field("secret_key", &self.secret_key.as_ref().map(|_| REDACTED))
            .field("crypt_key", &self.crypt_key.as_ref().map(|_| REDACTED))
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("password_reset_endpoint", &self.password_reset_endpoint)
            .finish()
    }
}

/// Host-facing server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    /// Hostnames the app may serve, in declaration order
    pub allowed_hosts: Vec<String>,
    pub debug: bool,
    pub append_slash: bool,
}

/// Postgres connection parameters.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    pub name: Option<String>,
    pub user: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl DatabaseSettings {
    /// Assemble a connection URL when enough of the section is present.
    pub fn url(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        let host = self.host.as_deref()?;
        let port = self.port.unwrap_or(DEFAULT_POSTGRES_PORT);
        let auth = match (self.user.as_deref(), self.password.as_deref()) {
            (Some(user), Some(password)) => format!("{}:{}@", user, password),
            (Some(user), None) => format!("{}@", user),
            _ => String::new(),
        };
        Some(format!("postgres://{}{}:{}/{}", auth, host, port, name))
    }
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Task-queue broker connection (env `RABBIT_MQ_URL`).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BrokerSettings {
    /// AMQP URL, credentials included
    #[serde(skip_serializing)]
    pub url: Option<String>,
}

impl std::fmt::Debug for BrokerSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrokerSettings")
            .field("url", &self.url.as_ref().map(|_| REDACTED))
            .finish()
    }
}

/// Redis server location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedisSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl RedisSettings {
    pub fn url(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        let port = self.port.unwrap_or(DEFAULT_REDIS_PORT);
        Some(format!("redis://{}:{}", host, port))
    }
}

/// Outbound SMTP settings.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct EmailSettings {
    pub host: Option<String>,
    pub user: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub port: Option<u16>,
    pub use_tls: Option<bool>,
}

impl EmailSettings {
    pub fn is_configured(&self) -> bool {
        self.host.is_some()
    }
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

/// Object-storage (S3-compatible bucket) credentials.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct BucketSettings {
    #[serde(skip_serializing)]
    pub access_key_id: Option<String>,
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
    pub region: Option<String>,
    pub name: Option<String>,
    pub endpoint_url: Option<String>,
}

impl BucketSettings {
    pub fn is_configured(&self) -> bool {
        self.access_key_id.is_some() && self.secret_key.is_some() && self.name.is_some()
    }
}

impl std::fmt::Debug for BucketSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketSettings")
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| REDACTED))
            .field("secret_key", &self.secret_key.as_ref().map(|_| REDACTED))
            .field("region", &self.region)
            .field("name", &self.name)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

/// Cross-origin request policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsSettings {
    pub allow_all_origins: bool,
    pub allow_credentials: bool,
    /// Allowed request headers, defaults first
    pub allow_headers: Vec<&'static str>,
}

impl Settings {
    /// Load the env file (if any), then build the record from the
    /// environment.
    pub fn load(env_path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = env_file::load(env_path)? {
            tracing::debug!("Loaded environment from {}", path.display());
        }
        Self::from_env()
    }

    /// Build the configuration record from the current process environment.
    ///
    /// A pure transform: calling it twice under an unchanged environment
    /// yields equal records. Only `ALLOWED_HOSTS` is required; every other
    /// variable that is unset leaves its field as `None`. Values that are
    /// set but unparseable are rejected here rather than carried along as
    /// raw strings.
    pub fn from_env() -> ConfigResult<Self> {
        let allowed_hosts = required("ALLOWED_HOSTS")?
            .split(',')
            .map(str::to_owned)
            .collect();

        let security = SecuritySettings {
            secret_key: optional("SECRET_KEY"),
            crypt_key: optional("CRYPT_KEY"),
            token_ttl_seconds: optional_u64("DURATION")?,
            password_reset_endpoint: optional("PASSWORD_RESET_ENDPOINT"),
        };

        match &security.secret_key {
            Some(key) if key.len() < MIN_SECRET_KEY_LENGTH => {
                tracing::warn!(
                    "SECRET_KEY is shorter than {} characters",
                    MIN_SECRET_KEY_LENGTH
                );
            }
            None => {
                tracing::warn!("SECRET_KEY not set; downstream signing will be unavailable");
            }
            _ => {}
        }

        Ok(Self {
            security,
            server: ServerSettings {
                allowed_hosts,
                debug: SERVER_DEBUG,
                append_slash: SERVER_APPEND_SLASH,
            },
            database: DatabaseSettings {
                name: optional("DB_NAME"),
                user: optional("DB_USER"),
                password: optional("DB_PASSWORD"),
                host: optional("DB_HOST"),
                port: optional_u16("DB_PORT")?,
            },
            broker: BrokerSettings {
                url: optional("RABBIT_MQ_URL"),
            },
            redis: RedisSettings {
                host: optional("REDIS_SERVER_NAME"),
                port: optional_u16("REDIS_PORT")?,
            },
            email: EmailSettings {
                host: optional("SMTP_HOST"),
                user: optional("SMTP_HOST_USER"),
                password: optional("SMTP_HOST_PASSWORD"),
                port: optional_u16("SMTP_PORT")?,
                use_tls: optional_bool("SMTP_USE_TLS")?,
            },
            bucket: BucketSettings {
                access_key_id: optional("BUCKET_ACCESS_KEY_ID"),
                secret_key: optional("BUCKET_SECRET_KEY"),
                region: optional("BUCKET_REGION_NAME"),
                name: optional("BUCKET_NAME"),
                endpoint_url: optional("BUCKET_ENDPOINT_URL"),
            },
            cors: CorsSettings {
                allow_all_origins: CORS_ALLOW_ALL_ORIGINS,
                allow_credentials: CORS_ALLOW_CREDENTIALS,
                allow_headers: registry::cors_allow_headers(),
            },
        })
    }
}

fn required(name: &'static str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional(name: &'static str) -> Option<String> {
    env::var(name).ok()
}

fn optional_u64(name: &'static str) -> ConfigResult<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(name, raw, "expected an integer")),
        Err(_) => Ok(None),
    }
}

fn optional_u16(name: &'static str) -> ConfigResult<Option<u16>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(name, raw, "expected a port number")),
        Err(_) => Ok(None),
    }
}

fn optional_bool(name: &'static str) -> ConfigResult<Option<bool>> {
    match env::var(name) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::invalid(name, raw, "expected a boolean")),
        },
        Err(_) => Ok(None),
    }
}
