//! Handlers for the `/users/` collection.
//!
//! Reads are open; writes require an authenticated caller. The original
//! system left every user operation open -- treated here as an unintended
//! exposure (see DESIGN.md).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::{FieldErrors, INVALID_EMAIL};
use folio_db::models::user::{CreateUser, UpdateUser, UserResponse};
use folio_db::repositories::UserRepo;
use serde::Deserialize;
use validator::ValidateEmail;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// Minimum password length enforced on user creation.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Write payload for user create/update. The password is only consumed
/// on create; updates never touch it.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub groups: Option<Vec<String>>,
}

/// GET /api/users/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/users/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}

/// POST /api/users/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut errors = FieldErrors::new();
    if payload.username.as_deref().is_none_or(str::is_empty) {
        errors.require("username");
    }
    check_email(payload.email.as_deref(), &mut errors);
    match &payload.password {
        Some(password) => {
            if let Err(message) = validate_password_strength(password, MIN_PASSWORD_LENGTH) {
                errors.add("password", message);
            }
        }
        None => errors.require("password"),
    }
    errors.into_result().map_err(AppError::Core)?;

    let password_hash = hash_password(&payload.password.unwrap_or_default())
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username: payload.username.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password_hash,
        groups: payload.groups.unwrap_or_default(),
    };
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// PUT /api/users/{id}/
///
/// Full update: the username must be present; email and groups default
/// to staying unchanged when omitted.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut errors = FieldErrors::new();
    if payload.username.as_deref().is_none_or(str::is_empty) {
        errors.require("username");
    }
    check_email(payload.email.as_deref(), &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    update_inner(&state, id, payload).await
}

/// PATCH /api/users/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    payload: Result<Json<UserPayload>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut errors = FieldErrors::new();
    check_email(payload.email.as_deref(), &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    update_inner(&state, id, payload).await
}

/// DELETE /api/users/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn check_email(email: Option<&str>, errors: &mut FieldErrors) {
    if let Some(email) = email {
        if !email.is_empty() && !email.validate_email() {
            errors.add("email", INVALID_EMAIL);
        }
    }
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    payload: UserPayload,
) -> AppResult<Json<UserResponse>> {
    let input = UpdateUser {
        username: payload.username,
        email: payload.email,
        groups: payload.groups,
    };
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(Json(UserResponse::from(user)))
}
