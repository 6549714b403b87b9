//! Handlers for the `/education/` collection.
//!
//! Writes arrive as multipart form-data (text fields plus an optional
//! `image` file). A present image is uploaded to the media host before
//! the row is touched, so a failed upload never leaves a half-written
//! record.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::FieldErrors;
use folio_db::models::education::{
    CreateEducation, Education, EducationResponse, UpdateEducation,
};
use folio_db::repositories::EducationRepo;
use folio_media::{MediaFolder, MediaRef};

use crate::error::{AppError, AppResult};
use crate::forms::{self, FormData};
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// GET /api/education/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EducationResponse>>> {
    let rows = EducationRepo::list(&state.pool).await?;
    let responses = rows.into_iter().map(|row| to_response(&state, row)).collect();
    Ok(Json(responses))
}

/// GET /api/education/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EducationResponse>> {
    let row = EducationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))?;
    Ok(Json(to_response(&state, row)))
}

/// POST /api/education/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<EducationResponse>)> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let school = forms::require_text(&form, "school", &mut errors);
    let degree = forms::require_text(&form, "degree", &mut errors);
    let years = forms::require_text(&form, "years", &mut errors);
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = CreateEducation {
        school,
        degree,
        years,
        image,
        ordinal,
    };
    let row = EducationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(to_response(&state, row))))
}

/// PUT /api/education/{id}/
///
/// Full update: every text field must be present. The image stays
/// optional -- omitting it keeps the stored reference.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<EducationResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let school = forms::require_text(&form, "school", &mut errors);
    let degree = forms::require_text(&form, "degree", &mut errors);
    let years = forms::require_text(&form, "years", &mut errors);
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdateEducation {
        school: Some(school),
        degree: Some(degree),
        years: Some(years),
        image,
        ordinal: Some(ordinal),
    };
    update_inner(&state, id, input).await
}

/// PATCH /api/education/{id}/
///
/// Partial update: unspecified fields keep their stored values.
pub async fn partial_update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<EducationResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let school = forms::optional_text(&form, "school");
    let degree = forms::optional_text(&form, "degree");
    let years = forms::optional_text(&form, "years");
    let ordinal = forms::optional_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdateEducation {
        school,
        degree,
        years,
        image,
        ordinal,
    };
    update_inner(&state, id, input).await
}

/// DELETE /api/education/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = EducationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn to_response(state: &AppState, row: Education) -> EducationResponse {
    let image_url = row
        .image
        .as_ref()
        .map(|reference| state.media.resolve_url(reference, true));
    EducationResponse::new(row, image_url)
}

async fn store_image(
    state: &AppState,
    form: &mut FormData,
) -> Result<Option<MediaRef>, AppError> {
    match form.take_image() {
        Some(upload) => {
            let reference = state.media.store(upload, MediaFolder::Education).await?;
            Ok(Some(reference))
        }
        None => Ok(None),
    }
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: UpdateEducation,
) -> AppResult<Json<EducationResponse>> {
    let row = EducationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Education",
            id,
        }))?;
    Ok(Json(to_response(state, row)))
}
