pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_gamer_table;
mod m20261001_000003_create_game_type_table;
mod m20261001_000004_create_game_table;
mod m20261001_000005_create_event_table;
mod m20261001_000006_create_event_attendee_table;
mod m20261001_000007_seed_game_types;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_gamer_table::Migration),
            Box::new(m20261001_000003_create_game_type_table::Migration),
            Box::new(m20261001_000004_create_game_table::Migration),
            Box::new(m20261001_000005_create_event_table::Migration),
            Box::new(m20261001_000006_create_event_attendee_table::Migration),
            Box::new(m20261001_000007_seed_game_types::Migration),
        ]
    }
}
