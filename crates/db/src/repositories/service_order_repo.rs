//! Repository for the `service_orders` table.

use sqlx::PgPool;

use maintdesk_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use maintdesk_core::types::DbId;

use crate::models::service_order::{CreateServiceOrder, ServiceOrder, UpdateServiceOrder};

const COLUMNS: &str = "id, company_id, sector_id, equipment_id, technician_id, specialty_id, \
    template_id, alert_id, title, description, status, priority, scheduled_for, completed_at, \
    created_at, updated_at";

/// Provides CRUD operations for service orders.
pub struct ServiceOrderRepo;

impl ServiceOrderRepo {
    /// Insert a new service order. `status` defaults to `open` and
    /// `priority` to `medium`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceOrder,
    ) -> Result<ServiceOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_orders \
                (company_id, sector_id, equipment_id, technician_id, specialty_id, \
                 template_id, alert_id, title, description, status, priority, scheduled_for) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, \
                 COALESCE($10, 'open'), COALESCE($11, 'medium'), $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceOrder>(&query)
            .bind(input.company_id)
            .bind(input.sector_id)
            .bind(input.equipment_id)
            .bind(input.technician_id)
            .bind(input.specialty_id)
            .bind(input.template_id)
            .bind(input.alert_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.scheduled_for)
            .fetch_one(pool)
            .await
    }

    /// Find a service order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ServiceOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_orders WHERE id = $1");
        sqlx::query_as::<_, ServiceOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List service orders for a company, newest first, paginated.
    pub async fn list_by_company(
        pool: &PgPool,
        company_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<ServiceOrder>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM service_orders \
             WHERE company_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ServiceOrder>(&query)
            .bind(company_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a service order. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceOrder,
    ) -> Result<Option<ServiceOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE service_orders SET \
                sector_id = COALESCE($2, sector_id), \
                technician_id = COALESCE($3, technician_id), \
                specialty_id = COALESCE($4, specialty_id), \
                template_id = COALESCE($5, template_id), \
                title = COALESCE($6, title), \
                description = COALESCE($7, description), \
                status = COALESCE($8, status), \
                priority = COALESCE($9, priority), \
                scheduled_for = COALESCE($10, scheduled_for), \
                completed_at = COALESCE($11, completed_at), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceOrder>(&query)
            .bind(id)
            .bind(input.sector_id)
            .bind(input.technician_id)
            .bind(input.specialty_id)
            .bind(input.template_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.status)
            .bind(&input.priority)
            .bind(input.scheduled_for)
            .bind(input.completed_at)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a service order. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
