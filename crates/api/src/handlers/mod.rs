//! HTTP request handlers.
//!
//! Handlers stay thin: extract inputs, call a repository or the
//! dependency engine, map the outcome to a response. All entity delete
//! handlers route through [`maintdesk_core::dependency::attempt_delete`]
//! so nothing is removed behind the engine's back.

pub mod companies;
pub mod dependencies;
pub mod equipment;
pub mod maintenance_alerts;
pub mod report_settings;
pub mod sectors;
pub mod service_orders;
pub mod service_templates;
pub mod specialties;
pub mod template_categories;
pub mod users;
