use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use super::{GameRecord, GameService, GamerRecord, GamerService};
use crate::dto::EventPayload;
use crate::entities::{event, event_attendee};
use crate::error::AppError;

/// An event joined with its game (itself fully joined) and its organizer.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub event: event::Model,
    pub game: GameRecord,
    pub organizer: GamerRecord,
}

pub struct EventService;

impl EventService {
    /// All events in id order, optionally only those for one game.
    pub async fn list(
        db: &DatabaseConnection,
        game_id: Option<i32>,
    ) -> Result<Vec<EventRecord>, AppError> {
        let mut query = event::Entity::find().order_by_asc(event::Column::Id);
        if let Some(game_id) = game_id {
            query = query.filter(event::Column::GameId.eq(game_id));
        }

        let events = query.all(db).await?;
        Self::join(db, events).await
    }

    pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<EventRecord>, AppError> {
        let Some(event) = event::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Self::join(db, vec![event]).await?.pop())
    }

    /// The bare event row that an update is about to overwrite.
    ///
    /// An unknown id is treated as an internal error, unlike [`EventService::find`].
    pub async fn get_for_update(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<event::Model, AppError> {
        event::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::unhandled_miss("Event"))
    }

    /// Insert an event organized by `organizer_id`.
    pub async fn create(
        db: &DatabaseConnection,
        organizer_id: i32,
        payload: EventPayload,
    ) -> Result<event::Model, AppError> {
        let event = event::ActiveModel {
            game_id: Set(payload.game),
            description: Set(payload.description),
            date: Set(payload.date),
            time: Set(payload.time),
            organizer_id: Set(organizer_id),
            ..Default::default()
        };

        Ok(event.insert(db).await?)
    }

    /// Overwrite every client-editable column. The organizer never changes.
    pub async fn update(
        db: &DatabaseConnection,
        event: event::Model,
        payload: EventPayload,
    ) -> Result<event::Model, AppError> {
        let mut active: event::ActiveModel = event.into();
        active.game_id = Set(payload.game);
        active.description = Set(payload.description);
        active.date = Set(payload.date);
        active.time = Set(payload.time);

        Ok(active.update(db).await?)
    }

    /// Add `gamer_id` to the attendees of `event_id`. Adding an existing attendee is a no-op.
    ///
    /// Attendance has no HTTP surface; rows are managed here so the attendee table and its
    /// cascades stay covered.
    pub async fn add_attendee(
        db: &DatabaseConnection,
        event_id: i32,
        gamer_id: i32,
    ) -> Result<(), AppError> {
        let existing = event_attendee::Entity::find_by_id((event_id, gamer_id))
            .one(db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        event_attendee::ActiveModel {
            event_id: Set(event_id),
            gamer_id: Set(gamer_id),
        }
        .insert(db)
        .await?;
        Ok(())
    }

    /// Gamer ids attending `event_id`, ascending. Data-layer only, like [`Self::add_attendee`].
    pub async fn attendee_ids(db: &DatabaseConnection, event_id: i32) -> Result<Vec<i32>, AppError> {
        let rows = event_attendee::Entity::find()
            .filter(event_attendee::Column::EventId.eq(event_id))
            .order_by_asc(event_attendee::Column::GamerId)
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|row| row.gamer_id).collect())
    }

    /// Attach game and organizer to each event, keeping the input order.
    async fn join(
        db: &DatabaseConnection,
        events: Vec<event::Model>,
    ) -> Result<Vec<EventRecord>, AppError> {
        let games = GameService::load_many(db, events.iter().map(|e| e.game_id)).await?;
        let organizers =
            GamerService::load_many(db, events.iter().map(|e| e.organizer_id)).await?;

        events
            .into_iter()
            .map(|event| {
                let game = games.get(&event.game_id).cloned().ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Event {} references missing game {}",
                        event.id,
                        event.game_id
                    ))
                })?;
                let organizer = organizers.get(&event.organizer_id).cloned().ok_or_else(|| {
                    AppError::Internal(anyhow::anyhow!(
                        "Event {} references missing organizer {}",
                        event.id,
                        event.organizer_id
                    ))
                })?;
                Ok(EventRecord {
                    event,
                    game,
                    organizer,
                })
            })
            .collect()
    }
}
