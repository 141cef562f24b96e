use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::modules::health::schema::{DatabaseHealthResponse, HealthResponse, MessageResponse};
use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = &state.store;

    Json(HealthResponse {
        status: "ok".to_string(),
        database: store.db_name().to_string(),
        collections: store
            .collection_names()
            .iter()
            .map(|name| name.to_string())
            .collect(),
    })
}

pub async fn database_health(
    State(state): State<AppState>,
) -> Result<Json<DatabaseHealthResponse>, (StatusCode, Json<MessageResponse>)> {
    match state.store.ping().await {
        Ok(()) => Ok(Json(DatabaseHealthResponse {
            status: "ok".to_string(),
            database: state.store.db_name().to_string(),
        })),
        Err(e) => {
            warn!(error = %e, "MongoDB ping failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(MessageResponse { message: e.to_string() }),
            ))
        }
    }
}
