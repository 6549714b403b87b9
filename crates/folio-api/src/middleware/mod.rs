//! Authentication extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::RequireAuth`] -- Named wrapper for routes whose intent is "writes
//!   require authentication".

pub mod auth;
