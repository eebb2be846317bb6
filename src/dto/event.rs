use chrono::{NaiveDate, NaiveTime, Timelike};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;

use super::{GameResponse, GamerResponse};
use crate::error::AppError;
use crate::services::{EventRecord, GameService};
use crate::validation::Fields;

/// Longest accepted event description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 50;

/// Read view of an event. `game` is the full game view, so the game's type and owner are
/// expanded as well.
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: i32,
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `hh:mm:ss`, or `hh:mm:ss.ffffff` when there is a fraction
    pub time: String,
    pub game: GameResponse,
    pub organizer: GamerResponse,
}

impl From<EventRecord> for EventResponse {
    fn from(record: EventRecord) -> Self {
        let EventRecord {
            event,
            game,
            organizer,
        } = record;

        Self {
            id: event.id,
            description: event.description,
            date: event.date.format("%Y-%m-%d").to_string(),
            time: format_time(event.time),
            game: game.into(),
            organizer: organizer.into(),
        }
    }
}

fn format_time(time: NaiveTime) -> String {
    if time.nanosecond() == 0 {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M:%S%.6f").to_string()
    }
}

/// Client-editable fields of an event. `id` and `organizer` are assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub description: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub game: i32,
}

impl EventPayload {
    /// Validate a raw JSON body, including that `game` names an existing game.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every failing field, or an internal error if
    /// the game lookup fails.
    pub async fn validate(db: &DatabaseConnection, body: &Value) -> Result<Self, AppError> {
        let mut fields = Fields::from_body(body)?;

        let description = fields.text("description", Some(DESCRIPTION_MAX_LEN));
        let date = fields.date("date");
        let time = fields.time("time");
        let game = fields.primary_key("game");

        if let Some(id) = game {
            if !GameService::exists(db, id).await? {
                fields.missing_reference("game", id);
            }
        }

        match (description, date, time, game) {
            (Some(description), Some(date), Some(time), Some(game)) if fields.is_clean() => {
                Ok(Self {
                    description,
                    date,
                    time,
                    game,
                })
            }
            _ => Err(fields.into_error()),
        }
    }
}
