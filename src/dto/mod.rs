//! Wire shapes: read views rendered from joined records, and write payloads validated from
//! raw JSON bodies.

pub mod event;
pub mod game;
pub mod game_type;
pub mod gamer;

pub use event::{EventPayload, EventResponse};
pub use game::{GamePayload, GameResponse};
pub use game_type::GameTypeResponse;
pub use gamer::{GamerResponse, UserResponse};
