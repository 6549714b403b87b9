//! Statically declared route table.
//!
//! Every method+path pair is spelled out here (or in the per-resource
//! submodules) rather than generated from a registry, so the full HTTP
//! surface is auditable in one place.

pub mod auth;
pub mod education;
pub mod health;
pub mod portfolio;
pub mod skill;
pub mod users;
pub mod work;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (trailing slashes are significant):
///
/// ```text
/// /auth/login/          login (public)
///
/// /education/           list (public), create (auth)
/// /education/{id}/      retrieve (public), put/patch/delete (auth)
///
/// /work/                list (public), create (auth)
/// /work/{id}/           retrieve (public), put/patch/delete (auth)
///
/// /portfolios/          list (public), create (auth)
/// /portfolios/{id}/     retrieve (public), put/patch/delete (auth)
///
/// /skills/              list (public), create (auth)
/// /skills/{id}/         retrieve (public), put/patch/delete (auth)
///
/// /users/               list (public), create (auth)
/// /users/{id}/          retrieve (public), put/patch/delete (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(education::router())
        .merge(work::router())
        .merge(portfolio::router())
        .merge(skill::router())
        .merge(users::router())
}
