//! Route definitions for the work collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /work/        -> list
/// POST   /work/        -> create
/// GET    /work/{id}/   -> retrieve
/// PUT    /work/{id}/   -> update
/// PATCH  /work/{id}/   -> partial_update
/// DELETE /work/{id}/   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/work/", get(work::list).post(work::create))
        .route(
            "/work/{id}/",
            get(work::retrieve)
                .put(work::update)
                .patch(work::partial_update)
                .delete(work::destroy),
        )
}
