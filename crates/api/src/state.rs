use std::sync::Arc;

use metaclass_core::admin::AdminRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable; the allow-list is immutable after startup and
/// needs no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: metaclass_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Admin allow-list, loaded once at startup.
    pub admins: Arc<AdminRegistry>,
}
