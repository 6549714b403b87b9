//! Route definitions for user management.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /users/        -> list
/// POST   /users/        -> create
/// GET    /users/{id}/   -> retrieve
/// PUT    /users/{id}/   -> update
/// PATCH  /users/{id}/   -> partial_update
/// DELETE /users/{id}/   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/", get(users::list).post(users::create))
        .route(
            "/users/{id}/",
            get(users::retrieve)
                .put(users::update)
                .patch(users::partial_update)
                .delete(users::destroy),
        )
}
