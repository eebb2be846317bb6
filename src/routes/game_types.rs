use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::dto::GameTypeResponse;
use crate::error::AppError;
use crate::services::GameTypeService;
use crate::state::AppState;

/// Game types are read-only over the API.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_game_types))
        .route("/{id}", get(get_game_type))
}

/// `GET /gametypes`
async fn list_game_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<GameTypeResponse>>, AppError> {
    let types = GameTypeService::list(&state.db).await?;
    Ok(Json(types.into_iter().map(GameTypeResponse::from).collect()))
}

/// `GET /gametypes/{id}`
async fn get_game_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GameTypeResponse>, AppError> {
    let game_type = GameTypeService::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::no_match("GameType"))?;
    Ok(Json(game_type.into()))
}
