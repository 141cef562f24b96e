use axum::http::{header, HeaderValue, Method, StatusCode};
use axum_test::TestServer;
use logbase::config::database::{self, DatabaseConfig};
use logbase::config::server::ServerConfig;
use logbase::AppState;

const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=300";

const FRONTEND_ORIGIN: &str = "http://localhost:3000";

async fn setup_test_server() -> TestServer {
    setup_test_server_with("mongodb://localhost:27017", "*").await
}

async fn setup_test_server_with(uri: &str, allowed_origins: &str) -> TestServer {
    let db_config = DatabaseConfig {
        mongo_uri: uri.to_string(),
        db_name: "testdb".to_string(),
    };
    let store = database::connect(&db_config).await.unwrap();

    let server = ServerConfig {
        port: 8000,
        allowed_origins: allowed_origins.to_string(),
    };

    TestServer::new(logbase::app(AppState { store }, &server)).unwrap()
}

#[tokio::test]
async fn test_health() {
    let server = setup_test_server().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "testdb");
    assert_eq!(body["collections"], serde_json::json!(["logs", "users"]));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = setup_test_server().await;

    let response = server.get("/api/logs").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_database_health_unreachable() {
    let server = setup_test_server_with(UNREACHABLE_URI, "*").await;

    let response = server.get("/health/db").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body: serde_json::Value = response.json();
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_preflight_allows_only_get() {
    let server = setup_test_server_with("mongodb://localhost:27017", FRONTEND_ORIGIN).await;

    let response = server
        .method(Method::OPTIONS, "/health")
        .add_header(header::ORIGIN, HeaderValue::from_static(FRONTEND_ORIGIN))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET"
    );
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        FRONTEND_ORIGIN
    );
}
