//! HTTP-level integration tests for the login flow and token use.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, send_json};
use folio_api::auth::password::hash_password;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use sqlx::PgPool;

async fn seed_user(pool: &PgPool, username: &str, password: &str) {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(password).expect("hashing"),
        groups: vec![],
    };
    UserRepo::create(pool, &input).await.expect("seed user");
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_login_returns_bearer_token(pool: PgPool) {
    seed_user(&pool, "alice", "hunter2-hunter2").await;

    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/auth/login/",
        None,
        serde_json::json!({"username": "alice", "password": "hunter2-hunter2"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["token_type"], "Bearer");
    assert!(json["expires_in"].as_i64().unwrap() > 0);
    assert!(!json["access_token"].as_str().unwrap().is_empty());
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_login_wrong_password_rejected(pool: PgPool) {
    seed_user(&pool, "alice", "hunter2-hunter2").await;

    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/auth/login/",
        None,
        serde_json::json!({"username": "alice", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_login_unknown_user_same_rejection(pool: PgPool) {
    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/auth/login/",
        None,
        serde_json::json!({"username": "nobody", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[sqlx::test(migrations = "../folio-db/migrations")]
async fn test_issued_token_authorizes_a_write(pool: PgPool) {
    seed_user(&pool, "alice", "hunter2-hunter2").await;

    let login = body_json(
        send_json(
            build_test_app(pool.clone()),
            Method::POST,
            "/api/auth/login/",
            None,
            serde_json::json!({"username": "alice", "password": "hunter2-hunter2"}),
        )
        .await,
    )
    .await;
    let token = login["access_token"].as_str().unwrap().to_string();

    let response = send_json(
        build_test_app(pool),
        Method::POST,
        "/api/skills/",
        Some(&token),
        serde_json::json!({"skillName": "Rust", "ordinal": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}
