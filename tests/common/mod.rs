#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use levelup_api::config::{Config, Environment};
use levelup_api::state::AppState;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-testing-only-32chars";

pub fn test_config() -> Config {
    Config {
        database_url: String::new(),
        server_host: std::net::IpAddr::from([127, 0, 0, 1]),
        server_port: 0,
        environment: Environment::Development,
        log_level: "warn".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration_secs: 900,
        frontend_url: "http://localhost:3000".to_string(),
    }
}

/// Build the app router backed by a migrated in-memory `SQLite` database.
///
/// The connection is returned too, for tests that need to touch the store directly.
pub async fn test_app() -> (Router, DatabaseConnection) {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .unwrap_or_default();

    Migrator::up(&db, None).await.unwrap_or_default();

    let state = AppState {
        db: db.clone(),
        config: test_config(),
    };

    (levelup_api::routes::router().with_state(state), db)
}

/// Send a request and return (status, body).
async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Token {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap_or_default(),
        None => builder.body(Body::empty()).unwrap_or_default(),
    };

    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();
    let body_str = String::from_utf8(body.to_vec()).unwrap_or_default();

    (status, body_str)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, "GET", uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, String) {
    send(app, "POST", uri, None, Some(body)).await
}

pub async fn post_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, String) {
    send(app, "POST", uri, Some(token), Some(body)).await
}

pub async fn put_json_with_auth(
    app: &Router,
    uri: &str,
    body: &Value,
    token: &str,
) -> (StatusCode, String) {
    send(app, "PUT", uri, Some(token), Some(body)).await
}

/// POST an arbitrary body, with `content_type` as given (or no header at all).
pub async fn post_raw_with_auth(
    app: &Router,
    uri: &str,
    body: &str,
    content_type: Option<&str>,
    token: &str,
) -> (StatusCode, String) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Token {token}"));
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap_or_default();

    let response = app.clone().oneshot(request).await.unwrap_or_default();

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map(http_body_util::Collected::to_bytes)
        .unwrap_or_default();

    (status, String::from_utf8(body.to_vec()).unwrap_or_default())
}

pub fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Register a gamer called `username` and return their token.
pub async fn register(app: &Router, username: &str) -> String {
    let (status, body) = post_json(
        app,
        "/register",
        &json!({
            "username": username,
            "password": "SecurePass123!",
            "first_name": "Test",
            "last_name": username,
            "email": format!("{username}@levelup.test"),
            "bio": "Here to play",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    parse(&body)["token"].as_str().unwrap_or_default().to_string()
}

/// Ids of the seeded game types, ascending.
pub async fn game_type_ids(app: &Router) -> Vec<i64> {
    let (_, body) = get(app, "/gametypes").await;
    parse(&body)
        .as_array()
        .map(|types| types.iter().filter_map(|t| t["id"].as_i64()).collect())
        .unwrap_or_default()
}

/// Create a game of `game_type` through the API and return its id.
pub async fn create_game(app: &Router, token: &str, title: &str, game_type: i64) -> i64 {
    let (status, body) = post_json_with_auth(
        app,
        "/games",
        &json!({
            "title": title,
            "maker": "Milton Bradley",
            "number_of_players": 4,
            "skill_level": "Beginner",
            "game_type": game_type,
        }),
        token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create game failed: {body}");
    parse(&body)["id"].as_i64().unwrap_or_default()
}

/// Create an event for `game` through the API and return its id.
pub async fn create_event(app: &Router, token: &str, game: i64, description: &str) -> i64 {
    let (status, body) = post_json_with_auth(
        app,
        "/events",
        &json!({
            "description": description,
            "date": "2026-11-05",
            "time": "19:30",
            "game": game,
        }),
        token,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create event failed: {body}");
    parse(&body)["id"].as_i64().unwrap_or_default()
}
