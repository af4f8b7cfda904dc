//! Integration tests for the repository layer against a real database.
//!
//! Builds the company -> sector -> equipment -> service order hierarchy
//! and exercises create/read/update/delete plus deactivation.

use sqlx::PgPool;

use maintdesk_db::models::company::{CreateCompany, UpdateCompany};
use maintdesk_db::models::equipment::CreateEquipment;
use maintdesk_db::models::report_settings::UpdateReportSettings;
use maintdesk_db::models::sector::CreateSector;
use maintdesk_db::models::service_order::CreateServiceOrder;
use maintdesk_db::repositories::{
    CompanyRepo, EquipmentRepo, ReportSettingsRepo, SectorRepo, ServiceOrderRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_company(name: &str) -> CreateCompany {
    CreateCompany {
        name: name.to_string(),
        legal_name: None,
        email: None,
        phone: None,
        address: None,
    }
}

fn new_sector(company_id: i64, name: &str) -> CreateSector {
    CreateSector {
        company_id,
        name: name.to_string(),
        description: None,
    }
}

fn new_equipment(company_id: i64, name: &str) -> CreateEquipment {
    CreateEquipment {
        company_id,
        sector_id: None,
        name: name.to_string(),
        serial_number: None,
        model: None,
        manufacturer: None,
        status: None,
    }
}

fn new_order(company_id: i64, equipment_id: i64, title: &str) -> CreateServiceOrder {
    CreateServiceOrder {
        company_id,
        sector_id: None,
        equipment_id,
        technician_id: None,
        specialty_id: None,
        template_id: None,
        alert_id: None,
        title: title.to_string(),
        description: None,
        status: None,
        priority: None,
        scheduled_for: None,
    }
}

// ---------------------------------------------------------------------------
// Companies
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_and_fetch_company(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Acme Industrial"))
        .await
        .unwrap();
    assert!(company.is_active);

    let fetched = CompanyRepo::find_by_id(&pool, company.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.name, "Acme Industrial");
}

#[sqlx::test]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Before"))
        .await
        .unwrap();

    let updated = CompanyRepo::update(
        &pool,
        company.id,
        &UpdateCompany {
            name: Some("After".to_string()),
            legal_name: None,
            email: Some("ops@after.example".to_string()),
            phone: None,
            address: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.email.as_deref(), Some("ops@after.example"));
    assert_eq!(updated.phone, company.phone);
}

#[sqlx::test]
async fn duplicate_company_name_violates_unique_constraint(pool: PgPool) {
    CompanyRepo::create(&pool, &new_company("Dup")).await.unwrap();
    let err = CompanyRepo::create(&pool, &new_company("Dup"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db) => {
            assert_eq!(db.constraint(), Some("uq_companies_name"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test]
async fn deactivate_hides_company_from_active_listing(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Sleepy"))
        .await
        .unwrap();

    let deactivated = CompanyRepo::deactivate(&pool, company.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!deactivated.is_active);

    let active = CompanyRepo::list(&pool, false).await.unwrap();
    assert!(active.iter().all(|c| c.id != company.id));

    let all = CompanyRepo::list(&pool, true).await.unwrap();
    assert!(all.iter().any(|c| c.id == company.id));
}

#[sqlx::test]
async fn delete_removes_the_row(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Gone"))
        .await
        .unwrap();
    assert!(CompanyRepo::delete(&pool, company.id).await.unwrap());
    assert!(CompanyRepo::find_by_id(&pool, company.id)
        .await
        .unwrap()
        .is_none());
    // Second delete is a no-op.
    assert!(!CompanyRepo::delete(&pool, company.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn restrict_constraint_backstops_dependent_rows(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Guarded"))
        .await
        .unwrap();
    SectorRepo::create(&pool, &new_sector(company.id, "Boilers"))
        .await
        .unwrap();

    // The engine is the advertised guard; RESTRICT is the backstop when
    // a caller bypasses it.
    let err = CompanyRepo::delete(&pool, company.id).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));
}

#[sqlx::test]
async fn service_orders_list_newest_first(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Orders Inc"))
        .await
        .unwrap();
    let machine = EquipmentRepo::create(&pool, &new_equipment(company.id, "Press #1"))
        .await
        .unwrap();

    for i in 0..3 {
        ServiceOrderRepo::create(&pool, &new_order(company.id, machine.id, &format!("OS {i}")))
            .await
            .unwrap();
    }

    let orders = ServiceOrderRepo::list_by_company(&pool, company.id, Some(2), None)
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders[0].id > orders[1].id);
}

// ---------------------------------------------------------------------------
// Report settings
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn report_settings_upsert_creates_then_merges(pool: PgPool) {
    let company = CompanyRepo::create(&pool, &new_company("Branded"))
        .await
        .unwrap();

    assert!(ReportSettingsRepo::find_by_company(&pool, company.id)
        .await
        .unwrap()
        .is_none());

    let created = ReportSettingsRepo::upsert(
        &pool,
        company.id,
        &UpdateReportSettings {
            logo_url: Some("https://cdn.example/logo.png".to_string()),
            header_text: None,
            footer_text: None,
            accent_color: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(created.accent_color, "#004080");

    let merged = ReportSettingsRepo::upsert(
        &pool,
        company.id,
        &UpdateReportSettings {
            logo_url: None,
            header_text: Some("Maintenance report".to_string()),
            footer_text: None,
            accent_color: Some("#aa0000".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(merged.logo_url.as_deref(), Some("https://cdn.example/logo.png"));
    assert_eq!(merged.header_text.as_deref(), Some("Maintenance report"));
    assert_eq!(merged.accent_color, "#aa0000");
}
