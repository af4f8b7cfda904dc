//! Equipment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub name: String,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new piece of equipment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipment {
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub name: String,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<String>,
}

/// DTO for updating a piece of equipment. The company link is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEquipment {
    pub sector_id: Option<DbId>,
    pub name: Option<String>,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub status: Option<String>,
}
