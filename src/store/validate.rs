//! Field rules for materials, evaluated inside the store on every create and
//! every patch so that direct (non-HTTP) callers hit the same guards as the
//! API surface. Enum validity and field presence are already enforced by the
//! request types; the rules below cover everything the types cannot.

use crate::models::material::{MaterialPatch, NewMaterial};
use crate::store::StoreError;

pub const MIN_BUY_PRICE: f64 = 100.0;

/// One named rule over a draft material.
pub struct FieldRule {
    pub field: &'static str,
    pub check: fn(&NewMaterial) -> Result<(), String>,
}

pub const MATERIAL_RULES: &[FieldRule] = &[
    FieldRule { field: "code", check: check_code },
    FieldRule { field: "name", check: check_name },
    FieldRule { field: "buy_price", check: check_buy_price },
];

fn check_code(m: &NewMaterial) -> Result<(), String> {
    non_empty("Material Code", &m.code)
}

fn check_name(m: &NewMaterial) -> Result<(), String> {
    non_empty("Material Name", &m.name)
}

fn check_buy_price(m: &NewMaterial) -> Result<(), String> {
    buy_price_at_least_min(m.buy_price)
}

fn non_empty(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{label} is required"));
    }
    Ok(())
}

fn buy_price_at_least_min(price: f64) -> Result<(), String> {
    // The negated comparison also rejects NaN.
    if !(price >= MIN_BUY_PRICE) {
        return Err("Buy Price must be at least 100.".to_string());
    }
    Ok(())
}

pub fn validate_new(new: &NewMaterial) -> Result<(), StoreError> {
    for rule in MATERIAL_RULES {
        if let Err(msg) = (rule.check)(new) {
            tracing::debug!(field = rule.field, %msg, "material rejected");
            return Err(StoreError::Validation(msg));
        }
    }
    Ok(())
}

pub fn validate_patch(patch: &MaterialPatch) -> Result<(), StoreError> {
    if let Some(code) = &patch.code {
        non_empty("Material Code", code).map_err(StoreError::Validation)?;
    }
    if let Some(name) = &patch.name {
        non_empty("Material Name", name).map_err(StoreError::Validation)?;
    }
    if let Some(price) = patch.buy_price {
        buy_price_at_least_min(price).map_err(StoreError::Validation)?;
    }
    Ok(())
}
