use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Game types offered out of the box. The API exposes them read-only.
const GAME_TYPES: &[&str] = &[
    "Board Game",
    "Card Game",
    "Dice Game",
    "Tabletop Role Playing Game",
    "Miniatures Game",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let backend = manager.get_database_backend();

        // Keyed on label so re-running against a seeded database is a no-op
        for label in GAME_TYPES {
            let sql = format!(
                "INSERT INTO game_type (label) \
                 SELECT '{label}' \
                 WHERE NOT EXISTS (SELECT 1 FROM game_type WHERE label = '{label}')"
            );
            db.execute(sea_orm::Statement::from_string(backend, sql))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(GameType::Table)
                    .cond_where(Expr::col(GameType::Label).is_in(GAME_TYPES.iter().copied()))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum GameType {
    Table,
    Label,
}
