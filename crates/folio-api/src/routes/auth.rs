//! Route definitions for authentication.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST /auth/login/   -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login/", post(auth::login))
}
