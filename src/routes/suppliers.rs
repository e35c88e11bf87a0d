use axum::{middleware, routing::get, Router};

use crate::handlers::partner::{create_supplier, list_suppliers};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .layer(middleware::from_fn(require_auth))
}
