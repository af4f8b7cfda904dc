//! Repository for the `specialties` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::specialty::{CreateSpecialty, Specialty, UpdateSpecialty};

const COLUMNS: &str = "id, name, description, is_active, created_at, updated_at";

/// Provides CRUD operations for specialties.
pub struct SpecialtyRepo;

impl SpecialtyRepo {
    /// Insert a new specialty.
    pub async fn create(pool: &PgPool, input: &CreateSpecialty) -> Result<Specialty, sqlx::Error> {
        let query = format!(
            "INSERT INTO specialties (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Specialty>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a specialty by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Specialty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM specialties WHERE id = $1");
        sqlx::query_as::<_, Specialty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all specialties, optionally including deactivated ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Specialty>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM specialties ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM specialties WHERE is_active = true ORDER BY name")
        };
        sqlx::query_as::<_, Specialty>(&query).fetch_all(pool).await
    }

    /// Update a specialty. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSpecialty,
    ) -> Result<Option<Specialty>, sqlx::Error> {
        let query = format!(
            "UPDATE specialties SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Specialty>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a specialty. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM specialties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a specialty instead of deleting it.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<Specialty>, sqlx::Error> {
        let query = format!(
            "UPDATE specialties SET is_active = false, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Specialty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
