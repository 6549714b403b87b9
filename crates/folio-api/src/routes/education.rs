//! Route definitions for the education collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::education;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /education/        -> list
/// POST   /education/        -> create
/// GET    /education/{id}/   -> retrieve
/// PUT    /education/{id}/   -> update
/// PATCH  /education/{id}/   -> partial_update
/// DELETE /education/{id}/   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/education/", get(education::list).post(education::create))
        .route(
            "/education/{id}/",
            get(education::retrieve)
                .put(education::update)
                .patch(education::partial_update)
                .delete(education::destroy),
        )
}
