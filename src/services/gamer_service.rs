use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
    TransactionTrait,
};

use crate::entities::{gamer, user};
use crate::error::AppError;

/// A gamer together with the user account behind it.
#[derive(Debug, Clone)]
pub struct GamerRecord {
    pub gamer: gamer::Model,
    pub user: user::Model,
}

/// Everything needed to open a new account.
#[derive(Debug)]
pub struct NewGamer {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub bio: String,
}

pub struct GamerService;

impl GamerService {
    /// Resolve the gamer profile of an authenticated user.
    ///
    /// A user without a gamer profile is not an expected state; the miss is surfaced as an
    /// internal error rather than a client error.
    pub async fn for_user(db: &DatabaseConnection, user_id: i32) -> Result<gamer::Model, AppError> {
        gamer::Entity::find()
            .filter(gamer::Column::UserId.eq(user_id))
            .one(db)
            .await?
            .ok_or_else(|| AppError::unhandled_miss("Gamer"))
    }

    /// Load gamers with their user accounts, keyed by gamer id.
    pub async fn load_many(
        db: &DatabaseConnection,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, GamerRecord>, AppError> {
        let ids = super::distinct_ids(ids);
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = gamer::Entity::find()
            .filter(gamer::Column::Id.is_in(ids))
            .find_also_related(user::Entity)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(gamer, user)| {
                let user = user.ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!("Gamer {} has no user account", gamer.id))
                })?;
                Ok((gamer.id, GamerRecord { gamer, user }))
            })
            .collect()
    }

    pub async fn find_by_username(
        db: &DatabaseConnection,
        username: &str,
    ) -> Result<Option<user::Model>, AppError> {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?)
    }

    /// Create a user account and its gamer profile in one transaction.
    ///
    /// A username taken between the caller's availability check and the insert is reported
    /// as [`AppError::Conflict`].
    pub async fn register(
        db: &DatabaseConnection,
        new_gamer: NewGamer,
    ) -> Result<GamerRecord, AppError> {
        let txn = db.begin().await?;

        let user = user::ActiveModel {
            username: Set(new_gamer.username),
            password_hash: Set(new_gamer.password_hash),
            first_name: Set(new_gamer.first_name),
            last_name: Set(new_gamer.last_name),
            email: Set(new_gamer.email),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(username_conflict)?;

        let gamer = gamer::ActiveModel {
            user_id: Set(user.id),
            bio: Set(new_gamer.bio),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(GamerRecord { gamer, user })
    }
}

fn username_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::Conflict("Username already taken.".to_string())
        }
        _ => err.into(),
    }
}
