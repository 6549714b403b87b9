//! Shared domain types for the folio backend.
//!
//! Everything here is dependency-light so both the persistence layer and
//! the HTTP layer can use the same error taxonomy and id/timestamp types.

pub mod error;
pub mod types;
pub mod validation;
