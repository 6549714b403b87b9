//! Education entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use folio_media::MediaRef;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `education` table.
#[derive(Debug, Clone, FromRow)]
pub struct Education {
    pub id: DbId,
    pub school: String,
    pub degree: String,
    pub years: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an education entry. The image reference, when
/// present, must already be stored at the media host.
#[derive(Debug, Clone)]
pub struct CreateEducation {
    pub school: String,
    pub degree: String,
    pub years: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
}

/// DTO for updating an education entry. `None` fields keep their stored
/// values -- an absent image never clears the stored reference.
#[derive(Debug, Clone, Default)]
pub struct UpdateEducation {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub years: Option<String>,
    pub image: Option<MediaRef>,
    pub ordinal: Option<i32>,
}

/// Wire representation: entity fields plus the derived delivery URL.
#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    pub id: DbId,
    pub school: String,
    pub degree: String,
    pub years: String,
    pub image: Option<MediaRef>,
    pub ordinal: i32,
    pub image_url: Option<String>,
}

impl EducationResponse {
    pub fn new(row: Education, image_url: Option<String>) -> Self {
        Self {
            id: row.id,
            school: row.school,
            degree: row.degree,
            years: row.years,
            image: row.image,
            ordinal: row.ordinal,
            image_url,
        }
    }
}
