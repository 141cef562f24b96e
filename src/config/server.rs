use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(port = %raw, "Invalid PORT, falling back to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };
        let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Self {
            port,
            allowed_origins,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn cors_layer(&self) -> CorsLayer {
        if self.allowed_origins == "*" {
            return CorsLayer::very_permissive();
        }

        match self.allowed_origins.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET])
                .allow_headers(Any)
                .max_age(Duration::from_secs(60 * 60)),
            Err(_) => {
                warn!(origins = %self.allowed_origins, "Invalid ALLOWED_ORIGINS, allowing any origin");
                CorsLayer::very_permissive()
            }
        }
    }
}
