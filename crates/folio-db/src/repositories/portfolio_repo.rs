//! Repository for the `portfolio_items` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio_item::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};

const COLUMNS: &str = "id, title, description, image, url, years, ordinal, created_at, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new portfolio item, returning the created row. The image
    /// reference is mandatory here -- callers upload before persisting.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items (title, description, image, url, years, ordinal)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.url)
            .bind(&input.years)
            .bind(input.ordinal)
            .fetch_one(pool)
            .await
    }

    /// Find a portfolio item by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all portfolio items in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items ORDER BY ordinal ASC, id ASC");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a portfolio item. Only non-`None` fields in `input` are
    /// applied; the image can be replaced but never cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                image = COALESCE($4, image),
                url = COALESCE($5, url),
                years = COALESCE($6, years),
                ordinal = COALESCE($7, ordinal),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.image)
            .bind(&input.url)
            .bind(&input.years)
            .bind(input.ordinal)
            .fetch_optional(pool)
            .await
    }

    /// Delete a portfolio item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
