use serde::Serialize;

use crate::entities::user;
use crate::services::GamerRecord;

/// Public part of a user account. The password hash is never rendered.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct GamerResponse {
    pub id: i32,
    pub user: UserResponse,
    pub bio: String,
}

impl From<user::Model> for UserResponse {
    fn from(u: user::Model) -> Self {
        Self {
            id: u.id,
            username: u.username,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}

impl From<GamerRecord> for GamerResponse {
    fn from(record: GamerRecord) -> Self {
        Self {
            id: record.gamer.id,
            user: record.user.into(),
            bio: record.gamer.bio,
        }
    }
}
