//! Repository for the `users` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};

const COLUMNS: &str = "id, company_id, sector_id, specialty_id, name, email, phone, role, \
    is_active, created_at, updated_at";

/// Provides CRUD operations for staff users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. `role` defaults to `technician`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (company_id, sector_id, specialty_id, name, email, phone, role) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'technician')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.company_id)
            .bind(input.sector_id)
            .bind(input.specialty_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List users for a company, optionally including deactivated ones.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        include_inactive: bool,
    ) -> Result<Vec<User>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM users WHERE company_id = $1 ORDER BY name")
        } else {
            format!(
                "SELECT {COLUMNS} FROM users \
                 WHERE company_id = $1 AND is_active = true \
                 ORDER BY name"
            )
        };
        sqlx::query_as::<_, User>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a user. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET \
                sector_id = COALESCE($2, sector_id), \
                specialty_id = COALESCE($3, specialty_id), \
                name = COALESCE($4, name), \
                email = COALESCE($5, email), \
                phone = COALESCE($6, phone), \
                role = COALESCE($7, role), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.sector_id)
            .bind(input.specialty_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a user. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a user instead of deleting them.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET is_active = false, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
