//! User (staff) entity model and DTOs.
//!
//! Users here are back-office records (technicians, managers), not
//! authentication principals.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub company_id: DbId,
    pub sector_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<String>,
}

/// DTO for updating an existing user. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub sector_id: Option<DbId>,
    pub specialty_id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}
