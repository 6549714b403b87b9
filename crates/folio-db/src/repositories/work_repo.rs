//! Repository for the `work_experience` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::work::{CreateWork, UpdateWork, Work};

const COLUMNS: &str = "id, company, years, description, image, ordinal, created_at, updated_at";

/// Provides CRUD operations for work entries.
pub struct WorkRepo;

impl WorkRepo {
    /// Insert a new work entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateWork) -> Result<Work, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experience (company, years, description, image, ordinal)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(&input.company)
            .bind(&input.years)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.ordinal)
            .fetch_one(pool)
            .await
    }

    /// Find a work entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experience WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all work entries in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experience ORDER BY ordinal ASC, id ASC");
        sqlx::query_as::<_, Work>(&query).fetch_all(pool).await
    }

    /// Update a work entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWork,
    ) -> Result<Option<Work>, sqlx::Error> {
        let query = format!(
            "UPDATE work_experience SET
                company = COALESCE($2, company),
                years = COALESCE($3, years),
                description = COALESCE($4, description),
                image = COALESCE($5, image),
                ordinal = COALESCE($6, ordinal),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .bind(&input.company)
            .bind(&input.years)
            .bind(&input.description)
            .bind(&input.image)
            .bind(input.ordinal)
            .fetch_optional(pool)
            .await
    }

    /// Delete a work entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_experience WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
