use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::handlers::material::{create_material, delete_material, list_materials, update_material};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

// Routes kept wire-compatible with the original registration API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/materials", get(list_materials))
        .route("/materials/create", post(create_material))
        .route("/materials/update/{id}", post(update_material))
        .route("/materials/delete/{id}", delete(delete_material))
        .layer(middleware::from_fn(require_auth))
}
