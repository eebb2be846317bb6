use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;

use super::{GameTypeResponse, GamerResponse};
use crate::error::AppError;
use crate::services::{GameRecord, GameTypeService};
use crate::validation::Fields;

/// Read view of a game with its type and owner expanded.
#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i32,
    pub game_type: GameTypeResponse,
    pub title: String,
    pub maker: String,
    pub gamer: GamerResponse,
    pub number_of_players: i32,
    pub skill_level: String,
}

impl From<GameRecord> for GameResponse {
    fn from(record: GameRecord) -> Self {
        let GameRecord {
            game,
            game_type,
            owner,
        } = record;

        Self {
            id: game.id,
            game_type: game_type.into(),
            title: game.title,
            maker: game.maker,
            gamer: owner.into(),
            number_of_players: game.number_of_players,
            skill_level: game.skill_level,
        }
    }
}

/// Client-editable fields of a game, as accepted by create and update.
///
/// `id` and `gamer` are assigned by the server; if a client sends them they are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamePayload {
    pub title: String,
    pub maker: String,
    pub number_of_players: i32,
    pub skill_level: String,
    pub game_type: i32,
}

impl GamePayload {
    /// Validate a raw JSON body, including that `game_type` names an existing game type.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every failing field, or an internal error if
    /// the game type lookup fails.
    pub async fn validate(db: &DatabaseConnection, body: &Value) -> Result<Self, AppError> {
        let mut fields = Fields::from_body(body)?;

        let title = fields.text("title", None);
        let maker = fields.text("maker", None);
        let number_of_players = fields.integer("number_of_players");
        let skill_level = fields.text("skill_level", None);
        let game_type = fields.primary_key("game_type");

        if let Some(id) = game_type {
            if !GameTypeService::exists(db, id).await? {
                fields.missing_reference("game_type", id);
            }
        }

        match (title, maker, number_of_players, skill_level, game_type) {
            (
                Some(title),
                Some(maker),
                Some(number_of_players),
                Some(skill_level),
                Some(game_type),
            ) if fields.is_clean() => Ok(Self {
                title,
                maker,
                number_of_players,
                skill_level,
                game_type,
            }),
            _ => Err(fields.into_error()),
        }
    }
}
