//! Data access for each resource.
//!
//! Services return plain `SeaORM` models or fully joined records. Related rows are always
//! fetched by explicit batched queries (`id IN (...)`), one per related table, never by
//! walking relations row by row.

pub mod event_service;
pub mod game_service;
pub mod game_type_service;
pub mod gamer_service;

pub use event_service::{EventRecord, EventService};
pub use game_service::{GameRecord, GameService};
pub use game_type_service::GameTypeService;
pub use gamer_service::{GamerRecord, GamerService, NewGamer};

use std::collections::BTreeSet;

/// Distinct ids in ascending order, ready for an `IN (...)` filter.
fn distinct_ids(ids: impl IntoIterator<Item = i32>) -> Vec<i32> {
    ids.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
