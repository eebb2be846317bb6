use std::collections::HashMap;

use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use super::{GameTypeService, GamerRecord, GamerService};
use crate::dto::GamePayload;
use crate::entities::{game, game_type};
use crate::error::AppError;

/// A game joined with its type and its owner.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game: game::Model,
    pub game_type: game_type::Model,
    pub owner: GamerRecord,
}

pub struct GameService;

impl GameService {
    /// All games in id order, optionally only those of one game type.
    pub async fn list(
        db: &DatabaseConnection,
        game_type_id: Option<i32>,
    ) -> Result<Vec<GameRecord>, AppError> {
        let mut query = game::Entity::find().order_by_asc(game::Column::Id);
        if let Some(type_id) = game_type_id {
            query = query.filter(game::Column::GameTypeId.eq(type_id));
        }

        let games = query.all(db).await?;
        Self::join(db, games).await
    }

    /// One game with its type and owner, `None` if the id is unknown.
    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<GameRecord>, AppError> {
        let Some(game) = game::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::join(db, vec![game]).await?.pop())
    }

    /// The bare game row that an update is about to overwrite.
    ///
    /// An unknown id is treated as an internal error, unlike [`GameService::find`].
    pub async fn get_for_update(db: &DatabaseConnection, id: i32) -> Result<game::Model, AppError> {
        game::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::unhandled_miss("Game"))
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
        let count = game::Entity::find()
            .filter(game::Column::Id.eq(id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Insert a game owned by `gamer_id`.
    pub async fn create(
        db: &DatabaseConnection,
        gamer_id: i32,
        payload: GamePayload,
    ) -> Result<game::Model, AppError> {
        let game = game::ActiveModel {
            game_type_id: Set(payload.game_type),
            title: Set(payload.title),
            maker: Set(payload.maker),
            gamer_id: Set(gamer_id),
            number_of_players: Set(payload.number_of_players),
            skill_level: Set(payload.skill_level),
            ..Default::default()
        };

        Ok(game.insert(db).await?)
    }

    /// Overwrite every client-editable column. The owner never changes.
    pub async fn update(
        db: &DatabaseConnection,
        game: game::Model,
        payload: GamePayload,
    ) -> Result<game::Model, AppError> {
        let mut active: game::ActiveModel = game.into();
        active.game_type_id = Set(payload.game_type);
        active.title = Set(payload.title);
        active.maker = Set(payload.maker);
        active.number_of_players = Set(payload.number_of_players);
        active.skill_level = Set(payload.skill_level);

        Ok(active.update(db).await?)
    }

    /// Load games with their type and owner, keyed by game id.
    pub async fn load_many(
        db: &DatabaseConnection,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, GameRecord>, AppError> {
        let ids = super::distinct_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let games = game::Entity::find()
            .filter(game::Column::Id.is_in(ids))
            .all(db)
            .await?;

        Ok(Self::join(db, games)
            .await?
            .into_iter()
            .map(|record| (record.game.id, record))
            .collect())
    }

    /// Attach type and owner to each game, keeping the input order.
    async fn join(
        db: &DatabaseConnection,
        games: Vec<game::Model>,
    ) -> Result<Vec<GameRecord>, AppError> {
        let types = GameTypeService::load_many(db, games.iter().map(|g| g.game_type_id)).await?;
        let owners = GamerService::load_many(db, games.iter().map(|g| g.gamer_id)).await?;

        games
            .into_iter()
            .map(|game| {
                let game_type = types.get(&game.game_type_id).cloned().ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Game {} references missing game type {}",
                        game.id,
                        game.game_type_id
                    ))
                })?;
                let owner = owners.get(&game.gamer_id).cloned().ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Game {} references missing gamer {}",
                        game.id,
                        game.gamer_id
                    ))
                })?;
                Ok(GameRecord {
                    game,
                    game_type,
                    owner,
                })
            })
            .collect()
    }
}
