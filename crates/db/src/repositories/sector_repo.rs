//! Repository for the `sectors` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::sector::{CreateSector, Sector, UpdateSector};

const COLUMNS: &str = "id, company_id, name, description, is_active, created_at, updated_at";

/// Provides CRUD operations for sectors.
pub struct SectorRepo;

impl SectorRepo {
    /// Insert a new sector.
    pub async fn create(pool: &PgPool, input: &CreateSector) -> Result<Sector, sqlx::Error> {
        let query = format!(
            "INSERT INTO sectors (company_id, name, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sector>(&query)
            .bind(input.company_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a sector by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sector>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sectors WHERE id = $1");
        sqlx::query_as::<_, Sector>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sectors for a company, optionally including deactivated ones.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<Sector>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM sectors WHERE company_id = $1 ORDER BY name")
        } else {
            format!(
                "SELECT {COLUMNS} FROM sectors \
                 WHERE company_id = $1 AND is_active = true \
                 ORDER BY name"
            )
        };
        sqlx::query_as::<_, Sector>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a sector. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSector,
    ) -> Result<Option<Sector>, sqlx::Error> {
        let query = format!(
            "UPDATE sectors SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sector>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a sector. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sectors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a sector instead of deleting it.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<Sector>, sqlx::Error> {
        let query = format!(
            "UPDATE sectors SET is_active = false, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sector>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
