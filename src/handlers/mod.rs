//! HTTP handlers and the shared application state they run against.

pub mod health_handlers;
pub mod object_handlers;

use crate::services::orchestrator::ObjectStorageOrchestrator;
use sqlx::SqlitePool;
use std::{path::PathBuf, sync::Arc};

/// State shared by every handler: the orchestrator plus the raw pool and
/// blob root the readiness probe exercises directly.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ObjectStorageOrchestrator>,
    pub db: Arc<SqlitePool>,
    pub storage_root: PathBuf,
}
