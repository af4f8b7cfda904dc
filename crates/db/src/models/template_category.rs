//! Template category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `template_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TemplateCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new template category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateCategory {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a template category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTemplateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
}
