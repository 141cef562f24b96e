use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variables not loaded properly: {0}")]
    Invalid(#[from] validator::ValidationErrors),
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid MongoDB connection string: {0}")]
    Driver(#[from] mongodb::error::Error),
}
