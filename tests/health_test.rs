mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn health_reports_database() {
    let (app, _db) = common::test_app().await;
    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);

    let json = common::parse(&body);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["database"]["connected"], true);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _db) = common::test_app().await;
    let (status, _body) = common::get(&app, "/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
