//! Repository for the `equipment` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};

const COLUMNS: &str = "id, company_id, sector_id, name, serial_number, model, manufacturer, \
    status, created_at, updated_at";

/// Provides CRUD operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new piece of equipment. `status` defaults to `operational`.
    pub async fn create(pool: &PgPool, input: &CreateEquipment) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment \
                (company_id, sector_id, name, serial_number, model, manufacturer, status) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'operational')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(input.company_id)
            .bind(input.sector_id)
            .bind(&input.name)
            .bind(&input.serial_number)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a piece of equipment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List equipment for a company.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE company_id = $1 ORDER BY name");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a piece of equipment. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEquipment,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET \
                sector_id = COALESCE($2, sector_id), \
                name = COALESCE($3, name), \
                serial_number = COALESCE($4, serial_number), \
                model = COALESCE($5, model), \
                manufacturer = COALESCE($6, manufacturer), \
                status = COALESCE($7, status), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(input.sector_id)
            .bind(&input.name)
            .bind(&input.serial_number)
            .bind(&input.model)
            .bind(&input.manufacturer)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a piece of equipment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
