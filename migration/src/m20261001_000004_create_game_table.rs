use sea_orm_migration::prelude::*;

/// Creates the `game` table. A game belongs to one game type and is owned by one gamer;
/// removing either removes the game.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[allow(clippy::enum_variant_names)]
#[derive(DeriveIden)]
enum Game {
    Table,
    Id,
    GameTypeId,
    Title,
    Maker,
    GamerId,
    NumberOfPlayers,
    SkillLevel,
}

#[derive(DeriveIden)]
enum GameType {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Gamer {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Game::GameTypeId).integer().not_null())
                    .col(ColumnDef::new(Game::Title).text().not_null())
                    .col(ColumnDef::new(Game::Maker).text().not_null())
                    .col(ColumnDef::new(Game::GamerId).integer().not_null())
                    .col(ColumnDef::new(Game::NumberOfPlayers).integer().not_null())
                    .col(ColumnDef::new(Game::SkillLevel).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_game_type_id")
                            .from(Game::Table, Game::GameTypeId)
                            .to(GameType::Table, GameType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_gamer_id")
                            .from(Game::Table, Game::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Backs the `?type=` filter on the games listing
        manager
            .create_index(
                Index::create()
                    .name("idx_game_game_type_id")
                    .table(Game::Table)
                    .col(Game::GameTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Game::Table).to_owned())
            .await
    }
}
