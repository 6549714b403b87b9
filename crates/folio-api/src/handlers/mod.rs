//! Request handlers, one submodule per resource.
//!
//! Each submodule provides async handler functions (list, retrieve,
//! create, update, partial_update, destroy) for a single collection.
//! Handlers delegate to the corresponding repository in `folio_db` and
//! map errors via [`crate::error::AppError`].

pub mod auth;
pub mod education;
pub mod portfolio;
pub mod skill;
pub mod users;
pub mod work;
