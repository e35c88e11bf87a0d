//! In-memory record store. Backs the integration tests and lets the API run
//! without a PostgreSQL instance; applies the same field rules and supplier
//! checks as the PostgreSQL store.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::material::{Material, MaterialPatch, NewMaterial};
use crate::models::partner::{NewPartner, Partner};
use crate::models::user::{NewUser, User};
use crate::store::validate::{validate_new, validate_patch};
use crate::store::{Caller, Store, StoreError};

#[derive(Default)]
struct Inner {
    materials: Vec<Material>,
    partners: Vec<Partner>,
    users: Vec<User>,
    next_material_id: i64,
    next_partner_id: i64,
    next_user_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_materials(&self, _caller: &Caller) -> Result<Vec<Material>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut materials = inner.materials.clone();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(materials)
    }

    async fn create_material(
        &self,
        _caller: &Caller,
        new: NewMaterial,
    ) -> Result<Material, StoreError> {
        validate_new(&new)?;

        let mut inner = self.inner.lock().unwrap();
        let supplier_name = inner
            .partners
            .iter()
            .find(|p| p.id == new.supplier_id)
            .map(|p| p.name.clone())
            .ok_or_else(|| StoreError::validation("Supplier does not exist"))?;

        inner.next_material_id += 1;
        let material = Material {
            id: inner.next_material_id,
            code: new.code,
            name: new.name,
            material_type: new.material_type,
            buy_price: new.buy_price,
            supplier_id: new.supplier_id,
            supplier_name,
            created_at: Some(Utc::now()),
        };
        inner.materials.push(material.clone());
        Ok(material)
    }

    async fn update_material(
        &self,
        _caller: &Caller,
        id: i64,
        patch: MaterialPatch,
    ) -> Result<Material, StoreError> {
        let mut inner = self.inner.lock().unwrap();

        // Existence decides before any field rule.
        if !inner.materials.iter().any(|m| m.id == id) {
            return Err(StoreError::NotFound("Material"));
        }

        validate_patch(&patch)?;

        let supplier = match patch.supplier_id {
            Some(supplier_id) => Some(
                inner
                    .partners
                    .iter()
                    .find(|p| p.id == supplier_id)
                    .map(|p| (p.id, p.name.clone()))
                    .ok_or_else(|| StoreError::validation("Supplier does not exist"))?,
            ),
            None => None,
        };

        let material = inner
            .materials
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound("Material"))?;

        if let Some(code) = patch.code {
            material.code = code;
        }
        if let Some(name) = patch.name {
            material.name = name;
        }
        if let Some(material_type) = patch.material_type {
            material.material_type = material_type;
        }
        if let Some(buy_price) = patch.buy_price {
            material.buy_price = buy_price;
        }
        if let Some((supplier_id, supplier_name)) = supplier {
            material.supplier_id = supplier_id;
            material.supplier_name = supplier_name;
        }
        Ok(material.clone())
    }

    async fn delete_material(&self, _caller: &Caller, id: i64) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.materials.len();
        inner.materials.retain(|m| m.id != id);
        if inner.materials.len() == before {
            return Err(StoreError::NotFound("Material"));
        }
        Ok(())
    }

    async fn list_suppliers(&self) -> Result<Vec<Partner>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut partners: Vec<Partner> = inner
            .partners
            .iter()
            .filter(|p| p.is_material_supplier)
            .cloned()
            .collect();
        partners.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(partners)
    }

    async fn create_supplier(&self, new: NewPartner) -> Result<Partner, StoreError> {
        if new.name.trim().is_empty() {
            return Err(StoreError::validation("Supplier name is required"));
        }

        let mut inner = self.inner.lock().unwrap();
        inner.next_partner_id += 1;
        let partner = Partner {
            id: inner.next_partner_id,
            name: new.name.trim().to_string(),
            email: new.email,
            is_material_supplier: true,
            created_at: Some(Utc::now()),
        };
        inner.partners.push(partner.clone());
        Ok(partner)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.username == new.username) {
            return Err(StoreError::Conflict("Username already exists".to_string()));
        }

        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: new.username,
            password_hash: new.password_hash,
            role: new.role,
            is_active: true,
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }
}
