use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub collections: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
