//! PostgreSQL-backed record store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use crate::models::material::{Material, MaterialPatch, NewMaterial};
use crate::models::partner::{NewPartner, Partner};
use crate::models::user::{NewUser, User};
use crate::store::validate::{validate_new, validate_patch};
use crate::store::{Caller, Store, StoreError};

const MATERIAL_COLUMNS: &str = r#"m.id, m.code, m.name, m.material_type,
       m.buy_price::FLOAT8 AS buy_price,
       m.supplier_id, p.name AS supplier_name, m.created_at
  FROM materials m
  JOIN partners p ON p.id = m.supplier_id"#;

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_material(&self, id: i64) -> Result<Material, StoreError> {
        sqlx::query_as::<_, Material>(&format!("SELECT {MATERIAL_COLUMNS} WHERE m.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound("Material"))
    }

    async fn supplier_must_exist(&self, id: i64) -> Result<(), StoreError> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM partners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        if found.is_none() {
            return Err(StoreError::validation("Supplier does not exist"));
        }
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_materials(&self, _caller: &Caller) -> Result<Vec<Material>, StoreError> {
        let materials =
            sqlx::query_as::<_, Material>(&format!("SELECT {MATERIAL_COLUMNS} ORDER BY m.name ASC"))
                .fetch_all(&self.pool)
                .await?;
        Ok(materials)
    }

    async fn create_material(
        &self,
        caller: &Caller,
        new: NewMaterial,
    ) -> Result<Material, StoreError> {
        validate_new(&new)?;
        self.supplier_must_exist(new.supplier_id).await?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO materials (code, name, material_type, buy_price, supplier_id)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(&new.code)
        .bind(&new.name)
        .bind(new.material_type)
        .bind(new.buy_price)
        .bind(new.supplier_id)
        .fetch_one(&self.pool)
        .await?;

        info!(user = %caller.username, id, code = %new.code, "material created");
        self.fetch_material(id).await
    }

    async fn update_material(
        &self,
        caller: &Caller,
        id: i64,
        patch: MaterialPatch,
    ) -> Result<Material, StoreError> {
        // Existence decides before any field rule.
        self.fetch_material(id).await?;

        validate_patch(&patch)?;
        if let Some(supplier_id) = patch.supplier_id {
            self.supplier_must_exist(supplier_id).await?;
        }

        let updated = sqlx::query_scalar::<_, i64>(
            "UPDATE materials SET
                code = COALESCE($1, code),
                name = COALESCE($2, name),
                material_type = COALESCE($3, material_type),
                buy_price = COALESCE($4::FLOAT8, buy_price),
                supplier_id = COALESCE($5, supplier_id)
             WHERE id = $6 RETURNING id",
        )
        .bind(patch.code)
        .bind(patch.name)
        .bind(patch.material_type)
        .bind(patch.buy_price)
        .bind(patch.supplier_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if updated.is_none() {
            return Err(StoreError::NotFound("Material"));
        }

        info!(user = %caller.username, id, "material updated");
        self.fetch_material(id).await
    }

    async fn delete_material(&self, caller: &Caller, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound("Material"));
        }

        info!(user = %caller.username, id, "material deleted");
        Ok(())
    }

    async fn list_suppliers(&self) -> Result<Vec<Partner>, StoreError> {
        let partners = sqlx::query_as::<_, Partner>(
            "SELECT id, name, email, is_material_supplier, created_at
             FROM partners WHERE is_material_supplier ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(partners)
    }

    async fn create_supplier(&self, new: NewPartner) -> Result<Partner, StoreError> {
        if new.name.trim().is_empty() {
            return Err(StoreError::validation("Supplier name is required"));
        }

        let partner = sqlx::query_as::<_, Partner>(
            "INSERT INTO partners (name, email, is_material_supplier)
             VALUES ($1, $2, TRUE)
             RETURNING id, name, email, is_material_supplier, created_at",
        )
        .bind(new.name.trim())
        .bind(new.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(partner)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, is_active, created_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role, is_active, created_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, new: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id, username, password_hash, role, is_active, created_at",
        )
        .bind(&new.username)
        .bind(&new.password_hash)
        .bind(&new.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db) = e.as_database_error() {
                if db.code().as_deref() == Some("23505") {
                    return StoreError::Conflict("Username already exists".to_string());
                }
            }
            StoreError::Database(e)
        })?;
        Ok(user)
    }
}
