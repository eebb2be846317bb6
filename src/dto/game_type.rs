use serde::Serialize;

use crate::entities::game_type;

#[derive(Debug, Serialize)]
pub struct GameTypeResponse {
    pub id: i32,
    pub label: String,
}

impl From<game_type::Model> for GameTypeResponse {
    fn from(t: game_type::Model) -> Self {
        Self {
            id: t.id,
            label: t.label,
        }
    }
}
