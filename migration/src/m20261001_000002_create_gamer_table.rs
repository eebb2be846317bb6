use sea_orm_migration::prelude::*;

/// Creates the `gamer` table: the player profile attached one-to-one to a `user`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Gamer {
    Table,
    Id,
    UserId,
    Bio,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gamer::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Gamer::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Gamer::UserId).integer().not_null().unique_key())
                    .col(ColumnDef::new(Gamer::Bio).string_len(50).not_null().default(""))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gamer_user_id")
                            .from(Gamer::Table, Gamer::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gamer::Table).to_owned())
            .await
    }
}
