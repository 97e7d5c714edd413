//! SQLite-backed metadata store.

use crate::{
    metadata::{MetaError, MetaResult, MetadataStore},
    models::record::ObjectRecord,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::debug;

const RECORD_COLUMNS: &str = "id, path, original_filename, content_type, size, \
     owner_user_id, publicity, created_at, updated_at";

pub struct SqliteMetadataStore {
    db: Arc<SqlitePool>,
}

impl SqliteMetadataStore {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MetadataStore for SqliteMetadataStore {
    async fn insert(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord> {
        let now = Utc::now();
        sqlx::query_as::<_, ObjectRecord>(&format!(
            "INSERT INTO object_records \
                 (path, original_filename, content_type, size, owner_user_id, \
                  publicity, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&record.path)
        .bind(&record.original_filename)
        .bind(&record.content_type)
        .bind(record.size)
        .bind(record.owner_user_id)
        .bind(record.publicity)
        .bind(now)
        .bind(now)
        .fetch_one(&*self.db)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                MetaError::DuplicatePath(record.path.clone())
            } else {
                MetaError::Sqlx(err)
            }
        })
    }

    async fn update(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord> {
        sqlx::query_as::<_, ObjectRecord>(&format!(
            "UPDATE object_records \
             SET path = ?, original_filename = ?, content_type = ?, size = ?, \
                 owner_user_id = ?, publicity = ?, updated_at = ? \
             WHERE id = ? \
             RETURNING {RECORD_COLUMNS}"
        ))
        .bind(&record.path)
        .bind(&record.original_filename)
        .bind(&record.content_type)
        .bind(record.size)
        .bind(record.owner_user_id)
        .bind(record.publicity)
        .bind(Utc::now())
        .bind(record.id)
        .fetch_one(&*self.db)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                MetaError::DuplicatePath(record.path.clone())
            } else {
                MetaError::Sqlx(err)
            }
        })
    }

    async fn delete_by_id(&self, id: i64) -> MetaResult<()> {
        let result = sqlx::query("DELETE FROM object_records WHERE id = ?")
            .bind(id)
            .execute(&*self.db)
            .await?;
        if result.rows_affected() == 0 {
            debug!("record {} already absent on delete", id);
        }
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> MetaResult<Option<ObjectRecord>> {
        let record = sqlx::query_as::<_, ObjectRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM object_records WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&*self.db)
        .await?;
        Ok(record)
    }

    async fn find_by_path(&self, path: &str) -> MetaResult<Vec<ObjectRecord>> {
        let records = sqlx::query_as::<_, ObjectRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM object_records WHERE path = ?"
        ))
        .bind(path)
        .fetch_all(&*self.db)
        .await?;
        Ok(records)
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> MetaResult<Vec<ObjectRecord>> {
        let records = sqlx::query_as::<_, ObjectRecord>(&format!(
            "SELECT {RECORD_COLUMNS} FROM object_records \
             WHERE owner_user_id = ? ORDER BY path ASC"
        ))
        .bind(owner_id)
        .fetch_all(&*self.db)
        .await?;
        Ok(records)
    }
}

/// Return true if a SQLx error indicates a unique constraint violation.
fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.message().to_ascii_lowercase().contains("unique")
    )
}
