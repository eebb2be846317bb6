use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::middleware::AuthUser;
use crate::dto::{EventPayload, EventResponse};
use crate::error::AppError;
use crate::services::{EventService, GamerService};
use crate::state::AppState;
use crate::validation::JsonBody;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/{id}", get(get_event).put(update_event))
}

#[derive(Debug, Deserialize)]
struct EventListQuery {
    /// Only events for this game id.
    game: Option<i32>,
}

/// `GET /events`: all events, or those for one game with `?game=<id>`.
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let events = EventService::list(&state.db, query.game).await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// `GET /events/{id}`
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EventResponse>, AppError> {
    let event = EventService::find(&state.db, id)
        .await?
        .ok_or_else(|| AppError::no_match("Event"))?;
    Ok(Json(event.into()))
}

/// `POST /events`: the caller's gamer becomes the organizer.
async fn create_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let organizer = GamerService::for_user(&state.db, user.id).await?;
    let payload = EventPayload::validate(&state.db, &body).await?;

    let event = EventService::create(&state.db, organizer.id, payload).await?;
    tracing::info!(
        event_id = event.id,
        game_id = event.game_id,
        organizer_id = organizer.id,
        "Event created"
    );

    let created = EventService::find(&state.db, event.id)
        .await?
        .ok_or_else(|| AppError::unhandled_miss("Event"))?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(created))))
}

/// `PUT /events/{id}`: full replacement of the editable fields. Unknown ids are a 500.
async fn update_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<i32>,
    JsonBody(body): JsonBody<Value>,
) -> Result<StatusCode, AppError> {
    let event = EventService::get_for_update(&state.db, id).await?;
    let payload = EventPayload::validate(&state.db, &body).await?;

    EventService::update(&state.db, event, payload).await?;
    tracing::info!(event_id = id, user_id = user.id, "Event updated");

    Ok(StatusCode::NO_CONTENT)
}
