//! Repository for the `education` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, school, degree, years, image, ordinal, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// Insert a new education entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education (school, degree, years, image, ordinal)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.school)
            .bind(&input.degree)
            .bind(&input.years)
            .bind(&input.image)
            .bind(input.ordinal)
            .fetch_one(pool)
            .await
    }

    /// Find an education entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all education entries in display order. Equal ordinals keep
    /// insertion order via the id tie-break.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY ordinal ASC, id ASC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Update an education entry. Only non-`None` fields in `input` are
    /// applied; in particular an absent image keeps the stored reference.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                school = COALESCE($2, school),
                degree = COALESCE($3, degree),
                years = COALESCE($4, years),
                image = COALESCE($5, image),
                ordinal = COALESCE($6, ordinal),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.school)
            .bind(&input.degree)
            .bind(&input.years)
            .bind(&input.image)
            .bind(input.ordinal)
            .fetch_optional(pool)
            .await
    }

    /// Delete an education entry by ID. Returns `true` if a row was
    /// removed. The remote media object, if any, is left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
