#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use stackit_api::auth::jwt::{generate_access_token, JwtConfig};
use stackit_api::auth::password::hash_password;
use stackit_api::config::ServerConfig;
use stackit_api::router::build_app_router;
use stackit_api::state::AppState;
use stackit_core::types::DbId;
use stackit_db::models::user::CreateUser;
use stackit_db::repositories::UserRepo;

/// Password used for every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test-password-123";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery).
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A user created directly in the database, with a valid access token.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

/// Insert a user and mint an access token for it.
pub async fn create_user(pool: &PgPool, username: &str) -> TestUser {
    create_user_inner(pool, username, false).await
}

/// Insert an admin user and mint an access token for it.
pub async fn create_admin(pool: &PgPool, username: &str) -> TestUser {
    create_user_inner(pool, username, true).await
}

async fn create_user_inner(pool: &PgPool, username: &str, is_admin: bool) -> TestUser {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        },
    )
    .await
    .expect("user insert should succeed");

    if is_admin {
        sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = $1")
            .bind(user.id)
            .execute(pool)
            .await
            .expect("admin flag update should succeed");
    }

    let token = generate_access_token(user.id, is_admin, &test_config().jwt)
        .expect("token generation should succeed");

    TestUser {
        id: user.id,
        token,
    }
}

/// Send a request through the router without a TCP listener.
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response {
    request(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> Response {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, token: Option<&str>, body: Value) -> Response {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, token: Option<&str>) -> Response {
    request(app, Method::PUT, uri, token, None).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
