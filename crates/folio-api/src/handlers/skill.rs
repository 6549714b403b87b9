//! Handlers for the `/skills/` collection. The only collection without
//! an image, so writes are plain JSON rather than multipart.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::FieldErrors;
use folio_db::models::skill::{CreateSkill, SkillResponse, UpdateSkill};
use folio_db::repositories::SkillRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// Write payload. Fields are optional at the serde level so required-field
/// checks can aggregate into per-field messages instead of failing on the
/// first missing key.
#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    #[serde(rename = "skillName")]
    pub skill_name: Option<String>,
    pub ordinal: Option<i32>,
}

/// GET /api/skills/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SkillResponse>>> {
    let rows = SkillRepo::list(&state.pool).await?;
    Ok(Json(rows.into_iter().map(SkillResponse::from).collect()))
}

/// GET /api/skills/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SkillResponse>> {
    let row = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;
    Ok(Json(SkillResponse::from(row)))
}

/// POST /api/skills/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    payload: Result<Json<SkillPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<SkillResponse>)> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut errors = FieldErrors::new();
    if payload.skill_name.is_none() {
        errors.require("skillName");
    }
    if payload.ordinal.is_none() {
        errors.require("ordinal");
    }
    errors.into_result().map_err(AppError::Core)?;

    let input = CreateSkill {
        skill_name: payload.skill_name.unwrap_or_default(),
        ordinal: payload.ordinal.unwrap_or_default(),
    };
    let row = SkillRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(SkillResponse::from(row))))
}

/// PUT /api/skills/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    payload: Result<Json<SkillPayload>, JsonRejection>,
) -> AppResult<Json<SkillResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut errors = FieldErrors::new();
    if payload.skill_name.is_none() {
        errors.require("skillName");
    }
    if payload.ordinal.is_none() {
        errors.require("ordinal");
    }
    errors.into_result().map_err(AppError::Core)?;

    let input = UpdateSkill {
        skill_name: payload.skill_name,
        ordinal: payload.ordinal,
    };
    update_inner(&state, id, input).await
}

/// PATCH /api/skills/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    payload: Result<Json<SkillPayload>, JsonRejection>,
) -> AppResult<Json<SkillResponse>> {
    let Json(payload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let input = UpdateSkill {
        skill_name: payload.skill_name,
        ordinal: payload.ordinal,
    };
    update_inner(&state, id, input).await
}

/// DELETE /api/skills/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))
    }
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: UpdateSkill,
) -> AppResult<Json<SkillResponse>> {
    let row = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }))?;
    Ok(Json(SkillResponse::from(row)))
}
