use std::collections::HashMap;

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use crate::entities::game_type;
use crate::error::AppError;

pub struct GameTypeService;

impl GameTypeService {
    /// All game types in id order.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<game_type::Model>, AppError> {
        Ok(game_type::Entity::find()
            .order_by_asc(game_type::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn find(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<game_type::Model>, AppError> {
        Ok(game_type::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, AppError> {
        let count = game_type::Entity::find()
            .filter(game_type::Column::Id.eq(id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Load the game types with the given ids, keyed by id.
    pub async fn load_many(
        db: &DatabaseConnection,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, game_type::Model>, AppError> {
        let ids = super::distinct_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let types = game_type::Entity::find()
            .filter(game_type::Column::Id.is_in(ids))
            .all(db)
            .await?;

        Ok(types.into_iter().map(|t| (t.id, t)).collect())
    }
}
