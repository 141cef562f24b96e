use std::path::Path;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod modules;

use config::database::{self, DatabaseConfig, Store};
use config::server::ServerConfig;
use error::BootstrapError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
}

/// Load the environment, validate the database settings and build the
/// MongoDB handles. Nothing is constructed if either setting is missing.
pub async fn bootstrap(env_file: Option<&Path>) -> Result<AppState, BootstrapError> {
    config::env::load_env_file(env_file)?;
    let db_config = DatabaseConfig::from_env()?;
    let store = database::connect(&db_config).await?;

    Ok(AppState { store })
}

pub fn app(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(modules::health::routes::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(server.cors_layer())
}
