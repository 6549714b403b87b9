use std::sync::Arc;

use folio_media::MediaStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration built once at startup.
    pub config: Arc<ServerConfig>,
    /// External image host client. Trait object so tests can substitute
    /// an in-process fake.
    pub media: Arc<dyn MediaStore>,
}
