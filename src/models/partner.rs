use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Business partner. The `is_material_supplier` flag marks it eligible to
/// supply materials; it filters the supplier listing but does not gate the
/// validity of an existing material's supplier reference.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub is_material_supplier: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewPartner {
    pub name: String,
    pub email: Option<String>,
}
