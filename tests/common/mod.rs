//! Common test utilities for the integration suite

#![allow(dead_code)]

use axum_test::TestServer;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use keygate::server::{create_app, DatabaseConfig, ServerConfig};

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build the full application against an in-memory database
pub async fn spawn_test_server() -> TestServer {
    let config = ServerConfig {
        port: 0,
        token_secret: TEST_SECRET.to_string(),
        database: DatabaseConfig::Memory,
    };
    let app = create_app(config).await.expect("failed to build app");
    TestServer::new(app).expect("failed to start test server")
}

/// Authorization header value for Basic credentials
pub fn basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}

/// Authorization header value for a bearer token
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
