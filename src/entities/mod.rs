//! `SeaORM` entities, one module per table.

pub mod event;
pub mod event_attendee;
pub mod game;
pub mod game_type;
pub mod gamer;
pub mod user;
