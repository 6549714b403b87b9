//! Handlers for the `/work/` collection. Same multipart write path as
//! education; the upload always precedes the row write.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::FieldErrors;
use folio_db::models::work::{CreateWork, UpdateWork, Work, WorkResponse};
use folio_db::repositories::WorkRepo;
use folio_media::{MediaFolder, MediaRef};

use crate::error::{AppError, AppResult};
use crate::forms::{self, FormData};
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// GET /api/work/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<WorkResponse>>> {
    let rows = WorkRepo::list(&state.pool).await?;
    let responses = rows.into_iter().map(|row| to_response(&state, row)).collect();
    Ok(Json(responses))
}

/// GET /api/work/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkResponse>> {
    let row = WorkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Work", id }))?;
    Ok(Json(to_response(&state, row)))
}

/// POST /api/work/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<WorkResponse>)> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let company = forms::require_text(&form, "company", &mut errors);
    let years = forms::require_text(&form, "years", &mut errors);
    let description = forms::require_text(&form, "description", &mut errors);
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = CreateWork {
        company,
        years,
        description,
        image,
        ordinal,
    };
    let row = WorkRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(to_response(&state, row))))
}

/// PUT /api/work/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<WorkResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let company = forms::require_text(&form, "company", &mut errors);
    let years = forms::require_text(&form, "years", &mut errors);
    let description = forms::require_text(&form, "description", &mut errors);
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdateWork {
        company: Some(company),
        years: Some(years),
        description: Some(description),
        image,
        ordinal: Some(ordinal),
    };
    update_inner(&state, id, input).await
}

/// PATCH /api/work/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<WorkResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let company = forms::optional_text(&form, "company");
    let years = forms::optional_text(&form, "years");
    let description = forms::optional_text(&form, "description");
    let ordinal = forms::optional_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdateWork {
        company,
        years,
        description,
        image,
        ordinal,
    };
    update_inner(&state, id, input).await
}

/// DELETE /api/work/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WorkRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Work", id }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn to_response(state: &AppState, row: Work) -> WorkResponse {
    let image_url = row
        .image
        .as_ref()
        .map(|reference| state.media.resolve_url(reference, true));
    WorkResponse::new(row, image_url)
}

async fn store_image(
    state: &AppState,
    form: &mut FormData,
) -> Result<Option<MediaRef>, AppError> {
    match form.take_image() {
        Some(upload) => {
            let reference = state.media.store(upload, MediaFolder::Work).await?;
            Ok(Some(reference))
        }
        None => Ok(None),
    }
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: UpdateWork,
) -> AppResult<Json<WorkResponse>> {
    let row = WorkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Work", id }))?;
    Ok(Json(to_response(state, row)))
}
