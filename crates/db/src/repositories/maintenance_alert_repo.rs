//! Repository for the `maintenance_alerts` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::maintenance_alert::{
    CreateMaintenanceAlert, MaintenanceAlert, UpdateMaintenanceAlert,
};

const COLUMNS: &str = "id, equipment_id, template_id, name, frequency_days, next_due_at, \
    created_at, updated_at";

/// Provides CRUD operations for maintenance alerts.
pub struct MaintenanceAlertRepo;

impl MaintenanceAlertRepo {
    /// Insert a new maintenance alert.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMaintenanceAlert,
    ) -> Result<MaintenanceAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO maintenance_alerts \
                (equipment_id, template_id, name, frequency_days, next_due_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceAlert>(&query)
            .bind(input.equipment_id)
            .bind(input.template_id)
            .bind(&input.name)
            .bind(input.frequency_days)
            .bind(input.next_due_at)
            .fetch_one(pool)
            .await
    }

    /// Find a maintenance alert by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MaintenanceAlert>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM maintenance_alerts WHERE id = $1");
        sqlx::query_as::<_, MaintenanceAlert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List alerts for a piece of equipment, soonest due first.
    pub async fn list_by_equipment(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<MaintenanceAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM maintenance_alerts \
             WHERE equipment_id = $1 \
             ORDER BY next_due_at"
        );
        sqlx::query_as::<_, MaintenanceAlert>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }

    /// Update a maintenance alert. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMaintenanceAlert,
    ) -> Result<Option<MaintenanceAlert>, sqlx::Error> {
        let query = format!(
            "UPDATE maintenance_alerts SET \
                template_id = COALESCE($2, template_id), \
                name = COALESCE($3, name), \
                frequency_days = COALESCE($4, frequency_days), \
                next_due_at = COALESCE($5, next_due_at), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaintenanceAlert>(&query)
            .bind(id)
            .bind(input.template_id)
            .bind(&input.name)
            .bind(input.frequency_days)
            .bind(input.next_due_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a maintenance alert. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM maintenance_alerts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
