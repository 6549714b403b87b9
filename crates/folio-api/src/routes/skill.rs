//! Route definitions for the skills collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::skill;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /skills/        -> list
/// POST   /skills/        -> create
/// GET    /skills/{id}/   -> retrieve
/// PUT    /skills/{id}/   -> update
/// PATCH  /skills/{id}/   -> partial_update
/// DELETE /skills/{id}/   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/skills/", get(skill::list).post(skill::create))
        .route(
            "/skills/{id}/",
            get(skill::retrieve)
                .put(skill::update)
                .patch(skill::partial_update)
                .delete(skill::destroy),
        )
}
