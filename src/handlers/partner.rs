// src/handlers/partner.rs
use axum::{extract::State, http::StatusCode, Json};
use tracing::instrument;

use crate::dtos::partner::{CreateSupplierRequest, SupplierResponse};
use crate::error::AppError;
use crate::state::AppState;

// GET /suppliers - Partners flagged as material suppliers
#[instrument(skip(state))]
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<Vec<SupplierResponse>>, AppError> {
    let partners = state.store.list_suppliers().await?;
    Ok(Json(partners.into_iter().map(SupplierResponse::from).collect()))
}

// POST /suppliers - Register a partner as a material supplier
#[instrument(skip(state, payload))]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<SupplierResponse>), AppError> {
    let partner = state.store.create_supplier(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(SupplierResponse::from(partner))))
}
