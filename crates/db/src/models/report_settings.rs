//! PDF report branding settings, one row per company.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use maintdesk_core::types::{DbId, Timestamp};

/// A row from the `report_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportSettings {
    pub id: DbId,
    pub company_id: DbId,
    pub logo_url: Option<String>,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub accent_color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a company's report settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReportSettings {
    pub logo_url: Option<String>,
    pub header_text: Option<String>,
    pub footer_text: Option<String>,
    pub accent_color: Option<String>,
}
