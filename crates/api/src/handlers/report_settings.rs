//! Handlers for per-company report branding settings.
//!
//! One settings row per company, created lazily by the PUT handler.
//! Report settings are not a deletion parent, so no engine involvement.

use axum::extract::{Path, State};
use axum::Json;

use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::report_settings::{ReportSettings, UpdateReportSettings};
use maintdesk_db::repositories::ReportSettingsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /companies/{company_id}/report-settings
pub async fn get_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<ReportSettings>> {
    let settings = ReportSettingsRepo::find_by_company(&state.pool, company_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ReportSettings",
            id: company_id,
        })?;
    Ok(Json(settings))
}

/// PUT /companies/{company_id}/report-settings
pub async fn upsert(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Json(input): Json<UpdateReportSettings>,
) -> AppResult<Json<ReportSettings>> {
    let settings = ReportSettingsRepo::upsert(&state.pool, company_id, &input).await?;
    Ok(Json(settings))
}
