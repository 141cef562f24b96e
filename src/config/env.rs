use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigError;

const DEFAULT_ENV_FILE: &str = ".env";

/// Merge a `.env` file into the process environment.
///
/// Values from the file replace variables that are already set. With no
/// explicit `path` the nearest `.env` in the current directory or one of its
/// parents is used. A missing file is not an error: `Ok(None)` is returned and
/// the ambient environment is used as is.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, ConfigError> {
    match path {
        Some(path) => load_from(path.to_path_buf()),
        None => match env::current_dir() {
            Ok(dir) => load_nearest_env_file(&dir),
            Err(e) => {
                debug!(error = %e, "Current directory unavailable, skipping env file");
                Ok(None)
            }
        },
    }
}

/// Load the nearest `.env` found from `start` upwards.
pub fn load_nearest_env_file(start: &Path) -> Result<Option<PathBuf>, ConfigError> {
    match find_env_file(start) {
        Some(path) => load_from(path),
        None => {
            debug!("No env file found, using process environment only");
            Ok(None)
        }
    }
}

pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

fn load_from(path: PathBuf) -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::from_path_override(&path) {
        Ok(()) => {
            info!("Loaded environment from {}", path.display());
            Ok(Some(path))
        }
        Err(e) if e.not_found() => {
            debug!(path = %path.display(), "No env file found, using process environment only");
            Ok(None)
        }
        Err(source) => Err(ConfigError::EnvFile { path, source }),
    }
}
