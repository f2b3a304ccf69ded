//! Health probe smoke test.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_probe(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
}
