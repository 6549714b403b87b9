//! Route definitions for the portfolio collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// GET    /portfolios/        -> list
/// POST   /portfolios/        -> create
/// GET    /portfolios/{id}/   -> retrieve
/// PUT    /portfolios/{id}/   -> update
/// PATCH  /portfolios/{id}/   -> partial_update
/// DELETE /portfolios/{id}/   -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolios/", get(portfolio::list).post(portfolio::create))
        .route(
            "/portfolios/{id}/",
            get(portfolio::retrieve)
                .put(portfolio::update)
                .patch(portfolio::partial_update)
                .delete(portfolio::destroy),
        )
}
