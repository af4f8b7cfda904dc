//! Service order entity model and DTOs.
//!
//! The busiest table in the system: a service order references nearly
//! every other entity, which is why so many relationship rules point at
//! it.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `service_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceOrder {
    pub id: DbId,
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub equipment_id: DbId,
    pub technician_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub alert_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub scheduled_for: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceOrder {
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub equipment_id: DbId,
    pub technician_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub alert_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub scheduled_for: Option<Timestamp>,
}

/// DTO for updating a service order. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServiceOrder {
    pub sector_id: Option<DbId>,
    pub technician_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub template_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub scheduled_for: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}
