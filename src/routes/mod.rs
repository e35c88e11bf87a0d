pub mod materials;
pub mod suppliers;
pub mod users;

use axum::Router;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(materials::routes())
        .merge(suppliers::routes())
        .merge(users::routes())
}
