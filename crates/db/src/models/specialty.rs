//! Specialty entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `specialties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Specialty {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new specialty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSpecialty {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing specialty.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSpecialty {
    pub name: Option<String>,
    pub description: Option<String>,
}
