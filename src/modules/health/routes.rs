use axum::{routing::get, Router};

use crate::modules::health::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(controller::health))
        .route("/health/db", get(controller::database_health))
}
