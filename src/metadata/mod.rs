//! Metadata backend contract.
//!
//! The durable index of [`ObjectRecord`]s, kept separate from the blob
//! backend. Implementations are externally synchronized; the core performs
//! no cross-store transactions over them.

pub mod sqlite;

use crate::models::record::ObjectRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetaError {
    /// A live record already occupies the path (unique index).
    #[error("a record already exists at `{0}`")]
    DuplicatePath(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type MetaResult<T> = Result<T, MetaError>;

/// Durable store of object metadata records.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Persist a new record, returning it with its store-assigned id.
    async fn insert(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord>;

    /// Persist changes to an existing record (matched by id).
    async fn update(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord>;

    /// Remove a record. Removing an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> MetaResult<()>;

    async fn find_by_id(&self, id: i64) -> MetaResult<Option<ObjectRecord>>;

    /// All records stored under `path`. Callers filter for exact matches.
    async fn find_by_path(&self, path: &str) -> MetaResult<Vec<ObjectRecord>>;

    async fn find_all_by_owner(&self, owner_id: i64) -> MetaResult<Vec<ObjectRecord>>;
}
