//! Repository for the `companies` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::company::{Company, CreateCompany, UpdateCompany};

/// Column list for the `companies` table.
const COLUMNS: &str =
    "id, name, legal_name, email, phone, address, is_active, created_at, updated_at";

/// Provides CRUD operations for companies.
pub struct CompanyRepo;

impl CompanyRepo {
    /// Insert a new company.
    pub async fn create(pool: &PgPool, input: &CreateCompany) -> Result<Company, sqlx::Error> {
        let query = format!(
            "INSERT INTO companies (name, legal_name, email, phone, address) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(&input.name)
            .bind(&input.legal_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// Find a company by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM companies WHERE id = $1");
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all companies, optionally including deactivated ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Company>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM companies ORDER BY name")
        } else {
            format!("SELECT {COLUMNS} FROM companies WHERE is_active = true ORDER BY name")
        };
        sqlx::query_as::<_, Company>(&query).fetch_all(pool).await
    }

    /// Update a company. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCompany,
    ) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET \
                name = COALESCE($2, name), \
                legal_name = COALESCE($3, legal_name), \
                email = COALESCE($4, email), \
                phone = COALESCE($5, phone), \
                address = COALESCE($6, address), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.legal_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.address)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a company. Returns `true` if a row was removed.
    ///
    /// Callers must go through the deletion facade first; this method
    /// performs no dependency checking of its own.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a company instead of deleting it.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<Company>, sqlx::Error> {
        let query = format!(
            "UPDATE companies SET is_active = false, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
