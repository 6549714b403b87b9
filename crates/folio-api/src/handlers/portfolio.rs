//! Handlers for the `/portfolios/` collection.
//!
//! The one collection where the image is mandatory at creation. Updates
//! may replace the stored reference but can never clear it.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::FieldErrors;
use folio_db::models::portfolio_item::{
    CreatePortfolioItem, PortfolioItem, PortfolioItemResponse, UpdatePortfolioItem,
};
use folio_db::repositories::PortfolioRepo;
use folio_media::{MediaFolder, MediaRef};

use crate::error::{AppError, AppResult};
use crate::forms::{self, FormData};
use crate::middleware::auth::RequireAuth;
use crate::state::AppState;

/// GET /api/portfolios/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<PortfolioItemResponse>>> {
    let rows = PortfolioRepo::list(&state.pool).await?;
    let responses = rows.into_iter().map(|row| to_response(&state, row)).collect();
    Ok(Json(responses))
}

/// GET /api/portfolios/{id}/
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PortfolioItemResponse>> {
    let row = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id,
        }))?;
    Ok(Json(to_response(&state, row)))
}

/// POST /api/portfolios/
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<PortfolioItemResponse>)> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let title = forms::require_text(&form, "title", &mut errors);
    let description = forms::require_text(&form, "description", &mut errors);
    let url = forms::require_url(&form, "url", &mut errors);
    let years = forms::optional_text(&form, "years");
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    if !form.has_image() {
        errors.require("image");
    }
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    // Validation guaranteed a file is present.
    let Some(image) = store_image(&state, &mut form).await? else {
        return Err(AppError::InternalError(
            "validated image missing from form".into(),
        ));
    };

    let input = CreatePortfolioItem {
        title,
        description,
        image,
        url,
        years,
        ordinal,
    };
    let row = PortfolioRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(to_response(&state, row))))
}

/// PUT /api/portfolios/{id}/
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<PortfolioItemResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let title = forms::require_text(&form, "title", &mut errors);
    let description = forms::require_text(&form, "description", &mut errors);
    let url = forms::require_url(&form, "url", &mut errors);
    let years = forms::optional_text(&form, "years");
    let ordinal = forms::require_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdatePortfolioItem {
        title: Some(title),
        description: Some(description),
        image,
        url: Some(url),
        years,
        ordinal: Some(ordinal),
    };
    update_inner(&state, id, input).await
}

/// PATCH /api/portfolios/{id}/
pub async fn partial_update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<PortfolioItemResponse>> {
    let mut form = FormData::from_multipart(multipart).await?;

    let mut errors = FieldErrors::new();
    let title = forms::optional_text(&form, "title");
    let description = forms::optional_text(&form, "description");
    let url = forms::optional_url(&form, "url", &mut errors);
    let years = forms::optional_text(&form, "years");
    let ordinal = forms::optional_int(&form, "ordinal", &mut errors);
    forms::check_image(&form, &mut errors);
    errors.into_result().map_err(AppError::Core)?;

    let image = store_image(&state, &mut form).await?;

    let input = UpdatePortfolioItem {
        title,
        description,
        image,
        url,
        years,
        ordinal,
    };
    update_inner(&state, id, input).await
}

/// DELETE /api/portfolios/{id}/
pub async fn destroy(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PortfolioRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn to_response(state: &AppState, row: PortfolioItem) -> PortfolioItemResponse {
    let image_url = state.media.resolve_url(&row.image, true);
    PortfolioItemResponse::new(row, image_url)
}

async fn store_image(
    state: &AppState,
    form: &mut FormData,
) -> Result<Option<MediaRef>, AppError> {
    match form.take_image() {
        Some(upload) => {
            let reference = state.media.store(upload, MediaFolder::Portfolio).await?;
            Ok(Some(reference))
        }
        None => Ok(None),
    }
}

async fn update_inner(
    state: &AppState,
    id: DbId,
    input: UpdatePortfolioItem,
) -> AppResult<Json<PortfolioItemResponse>> {
    let row = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Portfolio",
            id,
        }))?;
    Ok(Json(to_response(state, row)))
}
