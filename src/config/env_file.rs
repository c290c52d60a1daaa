//! Env file loading.
//!
//! Deployments keep their variables in a project-relative env file rather
//! than exporting them by hand. The file is loaded into the process
//! environment before the settings record is built; variables already
//! present in the environment keep their values.

use std::env;
use std::path::{Path, PathBuf};

use super::constants::{DEFAULT_ENV_FILE, ENV_PATH_VAR};
use crate::errors::{ConfigError, ConfigResult};

/// Load environment variables from an env file.
///
/// Resolution order:
/// 1. an explicit path (CLI flag) - must exist;
/// 2. the `ENV_PATH` variable - must exist;
/// 3. the project convention `env_manager/.env` - skipped when absent.
///
/// Returns the path that was loaded, if any, so startup logging can report
/// where the configuration came from.
pub fn load(explicit: Option<&Path>) -> ConfigResult<Option<PathBuf>> {
    if let Some(path) = explicit {
        return load_required(path).map(Some);
    }

    if let Ok(path) = env::var(ENV_PATH_VAR) {
        return load_required(Path::new(&path)).map(Some);
    }

    let default = Path::new(DEFAULT_ENV_FILE);
    if default.exists() {
        return load_required(default).map(Some);
    }

    Ok(None)
}

fn load_required(path: &Path) -> ConfigResult<PathBuf> {
    dotenvy::from_path(path).map_err(|source| ConfigError::EnvFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}
