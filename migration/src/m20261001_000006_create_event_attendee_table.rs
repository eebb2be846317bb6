use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventAttendee::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(EventAttendee::EventId).integer().not_null())
                    .col(ColumnDef::new(EventAttendee::GamerId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(EventAttendee::EventId)
                            .col(EventAttendee::GamerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendee_event_id")
                            .from(EventAttendee::Table, EventAttendee::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_attendee_gamer_id")
                            .from(EventAttendee::Table, EventAttendee::GamerId)
                            .to(Gamer::Table, Gamer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Add index on gamer_id for "events I attend" lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_event_attendee_gamer_id")
                    .table(EventAttendee::Table)
                    .col(EventAttendee::GamerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventAttendee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventAttendee {
    Table,
    EventId,
    GamerId,
}

#[derive(DeriveIden)]
enum Event {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Gamer {
    Table,
    Id,
}
