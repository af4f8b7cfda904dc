//! Repository for the `report_settings` table.
//!
//! One row per company, created lazily on first write.

use sqlx::PgPool;

use maintdesk_core::types::DbId;

use crate::models::report_settings::{ReportSettings, UpdateReportSettings};

const COLUMNS: &str = "id, company_id, logo_url, header_text, footer_text, accent_color, \
    created_at, updated_at";

/// Provides access to per-company PDF branding settings.
pub struct ReportSettingsRepo;

impl ReportSettingsRepo {
    /// Find the settings row for a company.
    pub async fn find_by_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Option<ReportSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM report_settings WHERE company_id = $1");
        sqlx::query_as::<_, ReportSettings>(&query)
            .bind(company_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the settings row for a company. Only non-`None` fields
    /// overwrite existing values.
    pub async fn upsert(
        pool: &PgPool,
        company_id: DbId,
        input: &UpdateReportSettings,
    ) -> Result<ReportSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO report_settings \
                (company_id, logo_url, header_text, footer_text, accent_color) \
             VALUES ($1, $2, $3, $4, COALESCE($5, '#004080')) \
             ON CONFLICT ON CONSTRAINT uq_report_settings_company DO UPDATE SET \
                logo_url = COALESCE($2, report_settings.logo_url), \
                header_text = COALESCE($3, report_settings.header_text), \
                footer_text = COALESCE($4, report_settings.footer_text), \
                accent_color = COALESCE($5, report_settings.accent_color), \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReportSettings>(&query)
            .bind(company_id)
            .bind(&input.logo_url)
            .bind(&input.header_text)
            .bind(&input.footer_text)
            .bind(&input.accent_color)
            .fetch_one(pool)
            .await
    }
}
