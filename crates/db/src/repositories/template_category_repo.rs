//! Repository for the `template_categories` table.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::template_category::{
    CreateTemplateCategory, TemplateCategory, UpdateTemplateCategory,
};

const COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for template categories.
pub struct TemplateCategoryRepo;

impl TemplateCategoryRepo {
    /// Insert a new template category.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTemplateCategory,
    ) -> Result<TemplateCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO template_categories (name, description) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a template category by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM template_categories WHERE id = $1");
        sqlx::query_as::<_, TemplateCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all template categories.
    pub async fn list(pool: &PgPool) -> Result<Vec<TemplateCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM template_categories ORDER BY name");
        sqlx::query_as::<_, TemplateCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update a template category. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplateCategory,
    ) -> Result<Option<TemplateCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE template_categories SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TemplateCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a template category. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM template_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
