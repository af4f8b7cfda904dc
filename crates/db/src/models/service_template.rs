//! Service template entity model and DTOs.
//!
//! Templates carry a reusable checklist (stored as JSONB) that service
//! orders and maintenance alerts can reference.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `service_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceTemplate {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub checklist: Option<serde_json::Value>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceTemplate {
    pub category_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub checklist: Option<serde_json::Value>,
}

/// DTO for updating a service template.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServiceTemplate {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub checklist: Option<serde_json::Value>,
}
