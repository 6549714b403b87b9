//! Work experience entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use folio_media::MediaRef;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `work_experience` table.
#[derive(Debug, Clone, FromRow)]
pub struct Work {
    pub id: DbId,
    pub company: String,
    pub years: String,
    pub description: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a work entry.
#[derive(Debug, Clone)]
pub struct CreateWork {
    pub company: String,
    pub years: String,
    pub description: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
}

/// DTO for updating a work entry. `None` fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateWork {
    pub company: Option<String>,
    pub years: Option<String>,
    pub description: Option<String>,
    pub image: Option<MediaRef>,
    pub ordinal: Option<i32>,
}

/// Wire representation: entity fields plus the derived delivery URL.
#[derive(Debug, Clone, Serialize)]
pub struct WorkResponse {
    pub id: DbId,
    pub company: String,
    pub years: String,
    pub description: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
    pub image_url: Option<String>,
}

impl WorkResponse {
    pub fn new(row: Work, image_url: Option<String>) -> Self {
        Self {
            id: row.id,
            company: row.company,
            years: row.years,
            description: row.description,
            image: row.image,
            ordinal: row.ordinal,
            image_url,
        }
    }
}
