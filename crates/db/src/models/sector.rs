//! Sector entity model and DTOs.
//!
//! Sectors partition a company into maintenance areas; equipment, users
//! and service orders may all reference one.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `sectors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sector {
    pub id: DbId,
    pub company_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new sector.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSector {
    pub company_id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing sector. The company link is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSector {
    pub name: Option<String>,
    pub description: Option<String>,
}
