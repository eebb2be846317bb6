mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn list_game_types_returns_seeded_types() {
    let (app, _db) = common::test_app().await;
    let (status, body) = common::get(&app, "/gametypes").await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let types = common::parse(&body);
    let types = types.as_array().cloned().unwrap_or_default();
    assert_eq!(types.len(), 5);
    assert!(types.iter().any(|t| t["label"] == "Board Game"));
    for t in &types {
        assert!(t["id"].is_i64());
        assert!(t["label"].is_string());
        assert_eq!(t.as_object().map(serde_json::Map::len), Some(2));
    }
}

#[tokio::test]
async fn retrieve_game_type_echoes_id() {
    let (app, _db) = common::test_app().await;

    for id in common::game_type_ids(&app).await {
        let (status, body) = common::get(&app, &format!("/gametypes/{id}")).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(common::parse(&body)["id"], id);
    }
}

#[tokio::test]
async fn retrieve_missing_game_type_is_404_with_message() {
    let (app, _db) = common::test_app().await;
    let (status, body) = common::get(&app, "/gametypes/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        common::parse(&body)["message"],
        "GameType matching query does not exist."
    );
}

#[tokio::test]
async fn game_types_are_read_only() {
    let (app, _db) = common::test_app().await;
    let token = common::register(&app, "readonly").await;

    let (status, _) = common::post_json_with_auth(
        &app,
        "/gametypes",
        &serde_json::json!({ "label": "Video Game" }),
        &token,
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let (app, _db) = common::test_app().await;
    let (status, _) = common::get(&app, "/gametypes/board").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
