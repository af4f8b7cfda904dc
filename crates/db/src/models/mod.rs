//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod company;
pub mod equipment;
pub mod maintenance_alert;
pub mod report_settings;
pub mod sector;
pub mod service_order;
pub mod service_template;
pub mod specialty;
pub mod template_category;
pub mod user;
