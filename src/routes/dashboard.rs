use axum::Router;
use std::sync::Arc;

use crate::AppState;

/// Dashboard page and assets, embedded at compile time by build.rs.
pub fn static_routes() -> Router<Arc<AppState>> {
    memory_serve::load!()
        .index_file(Some("/index.html"))
        .fallback(Some("/index.html"))
        .into_router()
}
