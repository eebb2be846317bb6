use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::middleware::AuthUser;
use crate::dto::{GamePayload, GameResponse};
use crate::error::AppError;
use crate::services::{GameService, GamerService};
use crate::state::AppState;
use crate::validation::JsonBody;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games).post(create_game))
        .route("/{id}", get(get_game).put(update_game))
}

#[derive(Debug, Deserialize)]
struct GameListQuery {
    /// Only games of this game type id.
    #[serde(rename = "type")]
    game_type: Option<i32>,
}

/// `GET /games`: all games, or those of one type with `?type=<id>`.
async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GameListQuery>,
) -> Result<Json<Vec<GameResponse>>, AppError> {
    let games = GameService::list(&state.db, query.game_type).await?;
    Ok(Json(games.into_iter().map(GameResponse::from).collect()))
}

/// `GET /games/{id}`
async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GameResponse>, AppError> {
    let game = GameService::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::no_match("Game"))?;
    Ok(Json(game.into()))
}

/// `POST /games`: the caller's gamer becomes the owner.
async fn create_game(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let gamer = GamerService::for_user(&state.db, user.id).await?;
    let payload = GamePayload::validate(&state.db, &body).await?;

    let game = GameService::create(&state.db, gamer.id, payload).await?;
    tracing::info!(game_id = game.id, gamer_id = gamer.id, "Game created");

    let created = GameService::find(&state.db, game.id)
        .await?
        .ok_or_else(|| AppError::unhandled_miss("Game"))?;

    Ok((StatusCode::CREATED, Json(GameResponse::from(created))))
}

/// `PUT /games/{id}`: full replacement of the editable fields.
///
/// An unknown id is a 500, not a 404; see [`GameService::get_for_update`].
async fn update_game(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<Value>,
) -> Result<StatusCode, AppError> {
    let game = GameService::get_for_update(&state.db, id).await?;
    let payload = GamePayload::validate(&state.db, &body).await?;

    GameService::update(&state.db, game, payload).await?;
    tracing::info!(game_id = id, user_id = user.id, "Game updated");

    Ok(StatusCode::NO_CONTENT)
}
