use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The three material kinds the registry accepts. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MaterialType {
    Fabric,
    Jeans,
    Cotton,
}

/// A persisted material with its supplier's display name joined in.
#[derive(Debug, Clone, FromRow)]
pub struct Material {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub material_type: MaterialType,
    pub buy_price: f64,
    pub supplier_id: i64,
    pub supplier_name: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Fields required to register a material.
#[derive(Debug, Clone)]
pub struct NewMaterial {
    pub code: String,
    pub name: String,
    pub material_type: MaterialType,
    pub buy_price: f64,
    pub supplier_id: i64,
}

/// Partial overwrite applied by update; absent fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct MaterialPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub material_type: Option<MaterialType>,
    pub buy_price: Option<f64>,
    pub supplier_id: Option<i64>,
}
