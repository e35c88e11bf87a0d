pub mod memory;
pub mod postgres;
pub mod validate;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::material::{Material, MaterialPatch, NewMaterial};
use crate::models::partner::{NewPartner, Partner};
use crate::models::user::{NewUser, User};

/// Outcome taxonomy of every store operation. Handlers map each variant to a
/// status code; nothing is signalled through success payloads.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }
}

/// Identity of the caller performing a material operation. Passed explicitly
/// into the store instead of living in ambient request state.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// The record store owning material CRUD plus the partner and user lookups
/// the API needs. Implemented by [`postgres::PgStore`] in production and
/// [`memory::MemoryStore`] for tests and DB-less runs.
#[async_trait]
pub trait Store: Send + Sync {
    /// All materials, sorted by name ascending, supplier name joined in.
    async fn list_materials(&self, caller: &Caller) -> Result<Vec<Material>, StoreError>;

    /// Validates the field rules and the supplier reference, then inserts.
    async fn create_material(
        &self,
        caller: &Caller,
        new: NewMaterial,
    ) -> Result<Material, StoreError>;

    /// Overwrites the given fields; the buy-price rule re-runs whenever the
    /// patch touches it, and a patched supplier id must resolve.
    async fn update_material(
        &self,
        caller: &Caller,
        id: i64,
        patch: MaterialPatch,
    ) -> Result<Material, StoreError>;

    /// Permanent delete, no soft-delete.
    async fn delete_material(&self, caller: &Caller, id: i64) -> Result<(), StoreError>;

    /// Partners flagged as material suppliers, sorted by name ascending.
    async fn list_suppliers(&self) -> Result<Vec<Partner>, StoreError>;

    /// Creates a partner with the supplier flag set.
    async fn create_supplier(&self, new: NewPartner) -> Result<Partner, StoreError>;

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Fails with `Conflict` if the username is taken.
    async fn create_user(&self, new: NewUser) -> Result<User, StoreError>;
}
