use std::sync::Arc;

use maintdesk_core::dependency::ValidationEngine;
use maintdesk_db::SqlDependencyStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: maintdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Dependency-validation engine consulted before every delete.
    pub engine: Arc<ValidationEngine<SqlDependencyStore>>,
}
