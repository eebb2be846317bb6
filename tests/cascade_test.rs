mod common;

use axum::http::StatusCode;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use levelup_api::entities::{event, event_attendee, game, game_type, gamer, user};
use levelup_api::services::EventService;

fn id(v: i64) -> i32 {
    i32::try_from(v).unwrap_or_default()
}

async fn count_games(db: &DatabaseConnection) -> u64 {
    game::Entity::find().count(db).await.unwrap_or_default()
}

async fn count_events(db: &DatabaseConnection) -> u64 {
    event::Entity::find().count(db).await.unwrap_or_default()
}

async fn count_attendees(db: &DatabaseConnection) -> u64 {
    event_attendee::Entity::find()
        .count(db)
        .await
        .unwrap_or_default()
}

/// Id of the gamer that owns `game_id`.
async fn gamer_id_of(app: &axum::Router, game_id: i64) -> i32 {
    let (_, body) = common::get(app, &format!("/games/{game_id}")).await;
    id(common::parse(&body)["gamer"]["id"].as_i64().unwrap_or_default())
}

#[tokio::test]
async fn deleting_game_type_removes_its_games_and_events() {
    let (app, db) = common::test_app().await;
    let token = common::register(&app, "steve").await;
    let types = common::game_type_ids(&app).await;

    let doomed = common::create_game(&app, &token, "Yahtzee", types[2]).await;
    let kept = common::create_game(&app, &token, "Catan", types[0]).await;
    common::create_event(&app, &token, doomed, "Dice night").await;
    common::create_event(&app, &token, kept, "Catan night").await;

    let deleted = game_type::Entity::delete_by_id(id(types[2])).exec(&db).await;
    assert!(deleted.is_ok_and(|res| res.rows_affected == 1));

    assert_eq!(count_games(&db).await, 1);
    assert_eq!(count_events(&db).await, 1);

    let (status, _) = common::get(&app, &format!("/games/{doomed}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = common::get(&app, &format!("/games/{kept}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_game_removes_events_and_attendance() {
    let (app, db) = common::test_app().await;
    let token = common::register(&app, "steve").await;
    let game_type = common::game_type_ids(&app).await[0];
    let game_id = common::create_game(&app, &token, "Catan", game_type).await;
    let event_id = common::create_event(&app, &token, game_id, "Catan night").await;
    let gamer = gamer_id_of(&app, game_id).await;

    let joined = EventService::add_attendee(&db, id(event_id), gamer).await;
    assert!(joined.is_ok());
    assert_eq!(count_attendees(&db).await, 1);

    let deleted = game::Entity::delete_by_id(id(game_id)).exec(&db).await;
    assert!(deleted.is_ok());

    assert_eq!(count_events(&db).await, 0);
    assert_eq!(count_attendees(&db).await, 0);

    let (status, _) = common::get(&app, &format!("/events/{event_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn attending_twice_keeps_one_row() {
    let (app, db) = common::test_app().await;
    let steve = common::register(&app, "steve").await;
    let joe = common::register(&app, "joe").await;
    let game_type = common::game_type_ids(&app).await[0];

    let steve_game = common::create_game(&app, &steve, "Catan", game_type).await;
    let joe_game = common::create_game(&app, &joe, "Risk", game_type).await;
    let event_id = id(common::create_event(&app, &steve, steve_game, "Catan night").await);

    let steve_gamer = gamer_id_of(&app, steve_game).await;
    let joe_gamer = gamer_id_of(&app, joe_game).await;

    for gamer in [joe_gamer, steve_gamer, joe_gamer] {
        let added = EventService::add_attendee(&db, event_id, gamer).await;
        assert!(added.is_ok());
    }

    let attendees = EventService::attendee_ids(&db, event_id)
        .await
        .unwrap_or_default();
    let mut expected = vec![steve_gamer, joe_gamer];
    expected.sort_unstable();
    assert_eq!(attendees, expected);
}

#[tokio::test]
async fn deleting_gamer_removes_their_games_events_and_attendance() {
    let (app, db) = common::test_app().await;
    let steve = common::register(&app, "steve").await;
    let joe = common::register(&app, "joe").await;
    let game_type = common::game_type_ids(&app).await[0];

    let steve_game = common::create_game(&app, &steve, "Catan", game_type).await;
    let joe_game = common::create_game(&app, &joe, "Risk", game_type).await;
    let steve_event = id(common::create_event(&app, &steve, joe_game, "Risk night").await);
    let joe_event = id(common::create_event(&app, &joe, joe_game, "Risk rematch").await);

    let steve_gamer = gamer_id_of(&app, steve_game).await;
    let joe_gamer = gamer_id_of(&app, joe_game).await;
    assert!(EventService::add_attendee(&db, joe_event, steve_gamer).await.is_ok());
    assert!(EventService::add_attendee(&db, joe_event, joe_gamer).await.is_ok());

    let deleted = gamer::Entity::delete_by_id(steve_gamer).exec(&db).await;
    assert!(deleted.is_ok());

    assert_eq!(count_games(&db).await, 1);
    assert_eq!(count_events(&db).await, 1);
    assert_eq!(
        EventService::attendee_ids(&db, joe_event)
            .await
            .unwrap_or_default(),
        vec![joe_gamer]
    );
    assert!(
        EventService::attendee_ids(&db, steve_event)
            .await
            .unwrap_or_default()
            .is_empty()
    );
}

#[tokio::test]
async fn deleting_user_removes_gamer_profile() {
    let (app, db) = common::test_app().await;
    let token = common::register(&app, "steve").await;
    let game_type = common::game_type_ids(&app).await[0];
    let game_id = common::create_game(&app, &token, "Catan", game_type).await;

    let users = user::Entity::find().all(&db).await.unwrap_or_default();
    assert_eq!(users.len(), 1);
    let user_id = users.first().map(|u| u.id).unwrap_or_default();

    let deleted = user::Entity::delete_by_id(user_id).exec(&db).await;
    assert!(deleted.is_ok());

    assert_eq!(
        gamer::Entity::find().count(&db).await.unwrap_or_default(),
        0
    );
    assert_eq!(count_games(&db).await, 0);

    let (status, _) = common::get(&app, &format!("/games/{game_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
