// src/handlers/material.rs
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::dtos::material::{
    CreateMaterialRequest, CreateMaterialResponse, MaterialItem, MaterialListResponse,
    MessageResponse, UpdateMaterialRequest,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::state::AppState;

// GET /materials - List all materials with supplier names
#[instrument(skip(state, auth))]
pub async fn list_materials(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<MaterialListResponse>, AppError> {
    let materials = state.store.list_materials(&auth.caller()).await?;
    Ok(Json(MaterialListResponse {
        data: materials.into_iter().map(MaterialItem::from).collect(),
    }))
}

// POST /materials/create - Register a new material
#[instrument(skip(state, auth, payload))]
pub async fn create_material(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateMaterialRequest>,
) -> Result<(StatusCode, Json<CreateMaterialResponse>), AppError> {
    let material = state.store.create_material(&auth.caller(), payload.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateMaterialResponse {
            id: material.id,
            message: "Material created successfully",
        }),
    ))
}

// POST /materials/update/:id - Overwrite the given fields
#[instrument(skip(state, auth, payload), fields(id))]
pub async fn update_material(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMaterialRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.update_material(&auth.caller(), id, payload.into()).await?;
    Ok(Json(MessageResponse { message: "Material updated successfully" }))
}

// DELETE /materials/delete/:id - Permanently remove a material
#[instrument(skip(state, auth), fields(id))]
pub async fn delete_material(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.store.delete_material(&auth.caller(), id).await?;
    Ok(Json(MessageResponse { message: "Material deleted successfully" }))
}
