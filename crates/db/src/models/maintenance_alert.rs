//! Maintenance alert entity model and DTOs.
//!
//! An alert schedules recurring maintenance for one piece of equipment,
//! optionally based on a service template.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `maintenance_alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MaintenanceAlert {
    pub id: DbId,
    pub equipment_id: DbId,
    pub template_id: Option<DbId>,
    pub name: String,
    pub frequency_days: i32,
    pub next_due_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new maintenance alert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaintenanceAlert {
    pub equipment_id: DbId,
    pub template_id: Option<DbId>,
    pub name: String,
    pub frequency_days: i32,
    pub next_due_at: Timestamp,
}

/// DTO for updating a maintenance alert.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMaintenanceAlert {
    pub template_id: Option<DbId>,
    pub name: Option<String>,
    pub frequency_days: Option<i32>,
    pub next_due_at: Option<Timestamp>,
}
