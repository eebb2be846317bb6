mod auth;
mod events;
mod game_types;
mod games;
mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// | Method | Path              | Handler                     |
/// |--------|-------------------|-----------------------------|
/// | GET    | `/health`         | health check with DB ping   |
/// | POST   | `/register`       | open an account, get token  |
/// | POST   | `/login`          | exchange credentials, token |
/// | GET    | `/gametypes`      | list game types             |
/// | GET    | `/gametypes/{id}` | retrieve a game type        |
/// | GET    | `/games`          | list games (`?type=`)       |
/// | POST   | `/games`          | create a game               |
/// | GET    | `/games/{id}`     | retrieve a game             |
/// | PUT    | `/games/{id}`     | replace a game              |
/// | GET    | `/events`         | list events (`?game=`)      |
/// | POST   | `/events`         | create an event             |
/// | GET    | `/events/{id}`    | retrieve an event           |
/// | PUT    | `/events/{id}`    | replace an event            |
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .nest("/gametypes", game_types::router())
        .nest("/games", games::router())
        .nest("/events", events::router())
}
