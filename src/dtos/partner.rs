// src/dtos/partner.rs
use serde::{Deserialize, Serialize};

use crate::models::partner::{NewPartner, Partner};

#[derive(Debug, Deserialize)]
pub struct CreateSupplierRequest {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SupplierResponse {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_material_supplier: bool,
    pub created_at: Option<String>,
}

impl From<Partner> for SupplierResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            email: partner.email,
            is_material_supplier: partner.is_material_supplier,
            created_at: partner.created_at.map(|dt| dt.to_rfc3339()),
        }
    }
}

impl From<CreateSupplierRequest> for NewPartner {
    fn from(req: CreateSupplierRequest) -> Self {
        Self { name: req.name, email: req.email }
    }
}
