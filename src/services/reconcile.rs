//! Consistency repair between blob existence and metadata existence.
//!
//! A record is consistent when the blob store and the metadata store agree
//! on whether its path exists. Divergence can appear whenever a write
//! crashes between the two stores or a blob is touched out of band; every
//! existence check runs the four-quadrant repair below, so divergence heals
//! on next access rather than immediately.

use crate::{
    errors::{IndexError, IndexResult},
    metadata::MetadataStore,
    models::record::ObjectRecord,
    services::{
        access_policy::{AccessPolicy, Permission},
        path_util,
    },
    storage::BlobStore,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Bound on the read-after-write convergence loop. A metadata miss with the
/// blob confirmed present retries the lookup this many times before giving
/// up with NotFound.
pub const MAX_LOOKUP_TRIES: u32 = 10;

#[derive(Clone)]
pub struct ReconciliationEngine {
    blobs: Arc<dyn BlobStore>,
    metadata: Arc<dyn MetadataStore>,
    policy: Arc<dyn AccessPolicy>,
}

impl ReconciliationEngine {
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        metadata: Arc<dyn MetadataStore>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        Self {
            blobs,
            metadata,
            policy,
        }
    }

    /// Report whether a blob exists at `path`, repairing any divergence
    /// found on the way:
    ///
    /// - blob present, metadata absent: adopt the blob under a synthesized
    ///   non-public record;
    /// - blob absent, metadata present: reap the stale record.
    ///
    /// Repairs are best-effort side effects; a failed repair is logged and
    /// the blob-existence answer is returned regardless.
    pub async fn confirm_exists(&self, path: &str) -> IndexResult<bool> {
        let blob_exists = self.blobs.exists(path).await?;
        let record = self.find_live_record(path).await?;

        match (blob_exists, record) {
            (true, None) => {
                if let Err(err) = self.adopt(path).await {
                    warn!("failed to adopt orphan blob at {}: {}", path, err);
                }
            }
            (false, Some(record)) => {
                if let Err(err) = self.reap(&record).await {
                    warn!("failed to reap stale record at {}: {}", path, err);
                }
            }
            _ => {}
        }

        Ok(blob_exists)
    }

    /// The record stored exactly at `path`, if any.
    pub async fn find_live_record(&self, path: &str) -> IndexResult<Option<ObjectRecord>> {
        let records = self.metadata.find_by_path(path).await?;
        Ok(records.into_iter().find(|record| record.path == path))
    }

    /// Bounded lookup that tolerates a metadata write still in flight: a
    /// miss with the blob present means a concurrent writer may be about to
    /// finish, so the lookup is retried (the existence check itself adopts
    /// the blob when no writer shows up). A miss with no blob is a plain
    /// "not found" answer, not an error.
    pub async fn lookup_by_path_with_retry(
        &self,
        path: &str,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        for attempt in 0..MAX_LOOKUP_TRIES {
            if let Some(record) = self.find_live_record(path).await? {
                if !self.policy.is_visible(&record, principal_id, granted) {
                    return Err(IndexError::NotFound("file not found".to_string()));
                }
                return Ok(Some(record));
            }
            if !self.confirm_exists(path).await? {
                return Ok(None);
            }
            debug!(attempt, "metadata lagging blob at {}, retrying", path);
        }
        Err(IndexError::NotFound("file not found".to_string()))
    }

    /// Synthesize and persist metadata for a blob discovered without any.
    /// The payload is read once, only to learn its size; everything else is
    /// derived from the path. Adopted records are never public.
    async fn adopt(&self, path: &str) -> IndexResult<()> {
        let data = self.blobs.read_all(path).await?;
        let file_name = path_util::file_name_from_path(path);

        let mut record = ObjectRecord::empty_at(path);
        record.original_filename = file_name.to_string();
        record.content_type = path_util::content_type_from_name(file_name);
        record.size = data.len() as i64;
        record.owner_user_id = path_util::owner_id_from_path(path)?;
        record.publicity = false;

        self.metadata.insert(&record).await?;
        info!("adopted orphan blob at {} ({} bytes)", path, data.len());
        Ok(())
    }

    /// Remove a record whose blob no longer exists. This is the standard
    /// delete flow for that state: with no blob there is nothing to move to
    /// trash, so only the metadata row goes.
    async fn reap(&self, record: &ObjectRecord) -> IndexResult<()> {
        let Some(id) = record.id else {
            return Ok(());
        };
        self.metadata.delete_by_id(id).await?;
        info!("reaped stale record {} at {}", id, record.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        access_policy::OwnerOrPublicPolicy,
        test_support::{MemoryBlobStore, MemoryMetadataStore},
    };

    struct Fixture {
        blobs: Arc<MemoryBlobStore>,
        metadata: Arc<MemoryMetadataStore>,
        engine: ReconciliationEngine,
    }

    fn fixture() -> Fixture {
        let blobs = Arc::new(MemoryBlobStore::default());
        let metadata = Arc::new(MemoryMetadataStore::default());
        let engine = ReconciliationEngine::new(
            blobs.clone(),
            metadata.clone(),
            Arc::new(OwnerOrPublicPolicy),
        );
        Fixture {
            blobs,
            metadata,
            engine,
        }
    }

    fn seeded_record(owner: i64, name: &str) -> ObjectRecord {
        let mut record = ObjectRecord::empty_at(format!("/{owner}/{name}"));
        record.original_filename = name.to_string();
        record.owner_user_id = owner;
        record
    }

    #[tokio::test]
    async fn consistent_pair_is_untouched() {
        let f = fixture();
        f.blobs.put("/7/a.txt", b"abc");
        f.metadata.seed(seeded_record(7, "a.txt"));

        assert!(f.engine.confirm_exists("/7/a.txt").await.unwrap());
        assert_eq!(f.metadata.all().len(), 1);
    }

    #[tokio::test]
    async fn orphan_blob_is_adopted() {
        let f = fixture();
        f.blobs.put("/7/photo.png", b"pngdata");

        assert!(f.engine.confirm_exists("/7/photo.png").await.unwrap());

        let records = f.metadata.all();
        assert_eq!(records.len(), 1);
        let adopted = &records[0];
        assert_eq!(adopted.owner_user_id, 7);
        assert_eq!(adopted.original_filename, "photo.png");
        assert_eq!(adopted.content_type.as_deref(), Some("image/png"));
        assert_eq!(adopted.size, 7);
        assert!(!adopted.publicity);

        // A second check finds the pair consistent and adopts nothing new.
        assert!(f.engine.confirm_exists("/7/photo.png").await.unwrap());
        assert_eq!(f.metadata.all().len(), 1);
    }

    #[tokio::test]
    async fn stale_record_is_reaped() {
        let f = fixture();
        f.metadata.seed(seeded_record(7, "doc.pdf"));

        assert!(!f.engine.confirm_exists("/7/doc.pdf").await.unwrap());
        assert!(f.metadata.all().is_empty());
    }

    #[tokio::test]
    async fn missing_on_both_sides_is_a_noop() {
        let f = fixture();
        assert!(!f.engine.confirm_exists("/7/ghost.txt").await.unwrap());
        assert!(f.metadata.all().is_empty());
    }

    #[tokio::test]
    async fn unadoptable_blob_still_reports_existing() {
        let f = fixture();
        f.blobs.put("/not-a-number/a.txt", b"abc");

        assert!(f.engine.confirm_exists("/not-a-number/a.txt").await.unwrap());
        assert!(f.metadata.all().is_empty());
    }

    #[tokio::test]
    async fn lookup_converges_via_adoption() {
        let f = fixture();
        f.blobs.put("/7/a.txt", b"abc");

        let record = f
            .engine
            .lookup_by_path_with_retry("/7/a.txt", 7, &[])
            .await
            .unwrap()
            .expect("adopted record");
        assert_eq!(record.path, "/7/a.txt");
    }

    #[tokio::test]
    async fn lookup_misses_cleanly_when_nothing_exists() {
        let f = fixture();
        let result = f
            .engine
            .lookup_by_path_with_retry("/7/ghost.txt", 7, &[])
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn lookup_hides_records_from_strangers() {
        let f = fixture();
        f.blobs.put("/7/a.txt", b"abc");
        f.metadata.seed(seeded_record(7, "a.txt"));

        let err = f
            .engine
            .lookup_by_path_with_retry("/7/a.txt", 99, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, IndexError::NotFound(_)));
    }

    #[tokio::test]
    async fn public_records_are_visible_to_anyone() {
        let f = fixture();
        f.blobs.put("/7/a.txt", b"abc");
        let mut record = seeded_record(7, "a.txt");
        record.publicity = true;
        f.metadata.seed(record);

        let found = f
            .engine
            .lookup_by_path_with_retry("/7/a.txt", 99, &[])
            .await
            .unwrap();
        assert!(found.is_some());
    }
}
