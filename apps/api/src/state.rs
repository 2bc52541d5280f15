use std::sync::Arc;

use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable data access. `PgStore` when DATABASE_URL is set, otherwise `MemoryStore`.
    pub store: Arc<dyn Store>,
}
