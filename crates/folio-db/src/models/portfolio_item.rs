//! Portfolio item entity model and DTOs.
//!
//! Unlike education and work entries, the image is mandatory at creation;
//! the row column is NOT NULL and `CreatePortfolioItem` carries a plain
//! `MediaRef`.

use folio_core::types::{DbId, Timestamp};
use folio_media::MediaRef;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: MediaRef,
    pub url: String,
    pub years: Option<String>,
    pub ordinal: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio item.
#[derive(Debug, Clone)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: String,
    pub image: MediaRef,
    pub url: String,
    pub years: Option<String>,
    pub ordinal: i32,
}

/// DTO for updating a portfolio item. `None` fields keep their stored
/// values; the image can be replaced but never cleared.
#[derive(Debug, Clone, Default)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<MediaRef>,
    pub url: Option<String>,
    pub years: Option<String>,
    pub ordinal: Option<i32>,
}

/// Wire representation: entity fields plus the derived delivery URL.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItemResponse {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image: MediaRef,
    pub url: String,
    pub years: Option<String>,
    pub ordinal: i32,
    pub image_url: String,
}

impl PortfolioItemResponse {
    pub fn new(row: PortfolioItem, image_url: String) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            image: row.image,
            url: row.url,
            years: row.years,
            ordinal: row.ordinal,
            image_url,
        }
    }
}
