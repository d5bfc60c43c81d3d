use std::sync::Arc;

use goldleaf_media::MediaHost;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: goldleaf_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Where gallery uploads are stored.
    pub media: Arc<dyn MediaHost>,
}
