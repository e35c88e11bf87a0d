// src/dtos/material.rs
use serde::{Deserialize, Serialize};

use crate::models::material::{Material, MaterialPatch, MaterialType, NewMaterial};

#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub code: String,
    pub name: String,
    pub material_type: MaterialType,
    pub buy_price: f64,
    pub supplier_id: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMaterialRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub material_type: Option<MaterialType>,
    pub buy_price: Option<f64>,
    pub supplier_id: Option<i64>,
}

/// List item; `supplier` carries the partner's display name, not its id.
#[derive(Debug, Serialize)]
pub struct MaterialItem {
    pub code: String,
    pub name: String,
    pub material_type: MaterialType,
    pub buy_price: f64,
    pub supplier: String,
}

#[derive(Debug, Serialize)]
pub struct MaterialListResponse {
    pub data: Vec<MaterialItem>,
}

#[derive(Debug, Serialize)]
pub struct CreateMaterialResponse {
    pub id: i64,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl From<Material> for MaterialItem {
    fn from(material: Material) -> Self {
        Self {
            code: material.code,
            name: material.name,
            material_type: material.material_type,
            buy_price: material.buy_price,
            supplier: material.supplier_name,
        }
    }
}

impl From<CreateMaterialRequest> for NewMaterial {
    fn from(req: CreateMaterialRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            material_type: req.material_type,
            buy_price: req.buy_price,
            supplier_id: req.supplier_id,
        }
    }
}

impl From<UpdateMaterialRequest> for MaterialPatch {
    fn from(req: UpdateMaterialRequest) -> Self {
        Self {
            code: req.code,
            name: req.name,
            material_type: req.material_type,
            buy_price: req.buy_price,
            supplier_id: req.supplier_id,
        }
    }
}
