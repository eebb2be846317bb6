use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::auth::{jwt, password};
use crate::error::AppError;
use crate::services::{GamerService, NewGamer};
use crate::state::AppState;
use crate::validation::JsonBody;

// ─────────────────────────────────────────────────────────────────────────────
// Router
// ─────────────────────────────────────────────────────────────────────────────

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

// ─────────────────────────────────────────────────────────────────────────────
// DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub token: String,
}

/// `valid: false` carries no token.
#[derive(Serialize)]
pub struct LoginResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /register`: open a user account with its gamer profile.
async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let username = body.username.trim().to_string();
    let email = body.email.trim().to_lowercase();

    password::validate_username(&username).map_err(AppError::BadRequest)?;
    password::validate_password(&body.password).map_err(AppError::BadRequest)?;
    if !email.is_empty() {
        password::validate_email(&email).map_err(AppError::BadRequest)?;
    }

    if GamerService::find_by_username(&state.db, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already taken.".to_string()));
    }

    let password_hash = password::hash_password(&body.password)?;

    let record = GamerService::register(
        &state.db,
        NewGamer {
            username,
            password_hash,
            first_name: body.first_name.trim().to_string(),
            last_name: body.last_name.trim().to_string(),
            email,
            bio: body.bio.trim().to_string(),
        },
    )
    .await?;

    tracing::info!(
        user_id = record.user.id,
        gamer_id = record.gamer.id,
        username = %record.user.username,
        "Gamer registered"
    );

    let token = jwt::generate_token(record.user.id, &record.user.username, &state.config)?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { token })))
}

/// `POST /login`: answers `200 {"valid": false}` on bad credentials, never 401.
async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let invalid = Json(LoginResponse {
        valid: false,
        token: None,
    });

    let Some(user) = GamerService::find_by_username(&state.db, body.username.trim()).await? else {
        return Ok(invalid);
    };

    if !password::verify_password(&body.password, &user.password_hash)? {
        tracing::debug!(user_id = user.id, "Login rejected");
        return Ok(invalid);
    }

    let token = jwt::generate_token(user.id, &user.username, &state.config)?;
    Ok(Json(LoginResponse {
        valid: true,
        token: Some(token),
    }))
}
