//! Defines routes for all object-index operations.
//!
//! ## Structure
//! - **Path-addressed endpoints**
//!   - `PUT    /files/{*path}` — upload a new object
//!   - `GET    /files/{*path}` — download payload + metadata headers
//!   - `HEAD   /files/{*path}` — metadata headers only
//!   - `GET    /files?id=&path=&name=` — criteria lookup
//!
//! - **Id-addressed endpoints**
//!   - `GET    /objects/{id}` — metadata by id
//!   - `PUT    /objects/{id}` — replace content
//!   - `PATCH  /objects/{id}` — partial metadata update
//!   - `DELETE /objects/{id}` — trash-move delete
//!
//! - **Owner endpoints**
//!   - `GET    /owners/{owner}/files` — owner listing
//!
//! The wildcard `*path` allows owner-prefixed paths like `7/photos/img.jpg`.

use crate::handlers::{
    AppState,
    health_handlers::{healthz, readyz},
    object_handlers::{
        delete_object, download_file, find_file, get_object, head_file, list_owner_files,
        patch_object, replace_object, upload_file,
    },
};
use axum::{
    Router,
    routing::{get, put},
};

/// Build and return the router for all object-index routes.
///
/// The router carries shared state (`AppState`) to all handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // path-addressed routes
        .route(
            "/files/{*path}",
            put(upload_file).get(download_file).head(head_file),
        )
        .route("/files", get(find_file))
        // id-addressed routes
        .route(
            "/objects/{id}",
            get(get_object)
                .put(replace_object)
                .patch(patch_object)
                .delete(delete_object),
        )
        // owner routes
        .route("/owners/{owner}/files", get(list_owner_files))
}
