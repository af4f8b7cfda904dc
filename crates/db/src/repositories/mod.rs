//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument and return
//! `Result<_, sqlx::Error>`.

pub mod company_repo;
pub mod equipment_repo;
pub mod maintenance_alert_repo;
pub mod report_settings_repo;
pub mod sector_repo;
pub mod service_order_repo;
pub mod service_template_repo;
pub mod specialty_repo;
pub mod template_category_repo;
pub mod user_repo;

pub use company_repo::CompanyRepo;
pub use equipment_repo::EquipmentRepo;
pub use maintenance_alert_repo::MaintenanceAlertRepo;
pub use report_settings_repo::ReportSettingsRepo;
pub use sector_repo::SectorRepo;
pub use service_order_repo::ServiceOrderRepo;
pub use service_template_repo::ServiceTemplateRepo;
pub use specialty_repo::SpecialtyRepo;
pub use template_category_repo::TemplateCategoryRepo;
pub use user_repo::UserRepo;
