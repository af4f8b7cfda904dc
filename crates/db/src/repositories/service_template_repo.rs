//! Repository for the `service_templates` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::service_template::{
    CreateServiceTemplate, ServiceTemplate, UpdateServiceTemplate,
};

const COLUMNS: &str =
    "id, category_id, name, description, checklist, is_active, created_at, updated_at";

/// Provides CRUD operations for service templates.
pub struct ServiceTemplateRepo;

impl ServiceTemplateRepo {
    /// Insert a new service template.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceTemplate,
    ) -> Result<ServiceTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_templates (category_id, name, description, checklist) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceTemplate>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.checklist)
            .fetch_one(pool)
            .await
    }

    /// Find a service template by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_templates WHERE id = $1");
        sqlx::query_as::<_, ServiceTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all service templates, optionally including deactivated ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<ServiceTemplate>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM service_templates ORDER BY name")
        } else {
            format!(
                "SELECT {COLUMNS} FROM service_templates \
                 WHERE is_active = true \
                 ORDER BY name"
            )
        };
        sqlx::query_as::<_, ServiceTemplate>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a service template. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceTemplate,
    ) -> Result<Option<ServiceTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE service_templates SET \
                category_id = COALESCE($2, category_id), \
                name = COALESCE($3, name), \
                description = COALESCE($4, description), \
                checklist = COALESCE($5, checklist), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceTemplate>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.checklist)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a service template. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deactivate a service template instead of deleting it.
    pub async fn deactivate(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceTemplate>, sqlx::Error> {
        let query = format!(
            "UPDATE service_templates SET is_active = false, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
