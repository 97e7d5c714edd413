//! The metadata record paired with every stored blob.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata for a single stored object.
///
/// The record lives in the metadata store; the payload bytes live in the
/// blob store under `path`. The two are reconciled on access, not
/// transactionally.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct ObjectRecord {
    /// Store-assigned identifier. `None` until the record is inserted.
    pub id: Option<i64>,

    /// Normalized location, `/{ownerUserId}/{fileName}`. Unique among live
    /// records.
    pub path: String,

    /// Last path segment, as uploaded.
    pub original_filename: String,

    /// MIME type derived from the filename extension.
    pub content_type: Option<String>,

    /// Payload length in bytes, authoritative at write time.
    pub size: i64,

    /// Owner parsed from the first path segment. Must agree with `path`.
    pub owner_user_id: i64,

    /// Public records are readable by any principal.
    pub publicity: bool,

    /// When the record was first persisted.
    pub created_at: DateTime<Utc>,

    /// Bumped on every metadata update.
    pub updated_at: DateTime<Utc>,

    /// Transient payload buffer. Present only around create/replace and on
    /// hydrated reads; never serialized and never stored in the metadata
    /// store.
    #[serde(skip)]
    #[sqlx(skip)]
    pub payload: Option<Bytes>,
}

impl ObjectRecord {
    /// A blank record for a path, used when synthesizing metadata for a
    /// blob discovered without any.
    pub fn empty_at(path: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            path: path.into(),
            original_filename: String::new(),
            content_type: None,
            size: 0,
            owner_user_id: 0,
            publicity: false,
            created_at: now,
            updated_at: now,
            payload: None,
        }
    }
}

/// Patchable subset of [`ObjectRecord`]. Only fields that are explicitly
/// set overwrite the original.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct ObjectRecordPatch {
    /// New file name; changing it moves the blob to `/{owner}/{name}`.
    pub original_filename: Option<String>,

    /// New visibility flag.
    pub publicity: Option<bool>,
}
