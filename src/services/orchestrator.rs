//! Public-facing service over the object index.
//!
//! Composes path normalization, the access policy, the reconciliation
//! engine, and the two stores into get/create/replace/patch/delete flows.
//! Writes are bracketed by markers in an [`ExpiringMarkerSet`] so a read
//! racing an in-flight write does not re-fetch a payload that is still
//! being written.

use crate::{
    errors::{IndexError, IndexResult},
    metadata::MetadataStore,
    models::record::{ObjectRecord, ObjectRecordPatch},
    services::{
        access_policy::{AccessPolicy, Permission},
        marker_set::ExpiringMarkerSet,
        path_util,
        reconcile::ReconciliationEngine,
    },
    storage::BlobStore,
};
use bytes::Bytes;
use std::{sync::Arc, time::Duration};
use tracing::debug;

/// Relocation root for deleted blobs.
pub const DEFAULT_TRASH_ROOT: &str = "/Trash";

/// Lifetime of a write marker. A marker orphaned by a crash mid-write
/// suppresses payload hydration for at most this long.
pub const DEFAULT_MARKER_TTL: Duration = Duration::from_secs(30);

pub struct ObjectStorageOrchestrator {
    blobs: Arc<dyn BlobStore>,
    metadata: Arc<dyn MetadataStore>,
    policy: Arc<dyn AccessPolicy>,
    reconcile: ReconciliationEngine,
    in_flight: ExpiringMarkerSet,
    trash_root: String,
}

impl ObjectStorageOrchestrator {
    pub fn new(
        blobs: Arc<dyn BlobStore>,
        metadata: Arc<dyn MetadataStore>,
        policy: Arc<dyn AccessPolicy>,
    ) -> Self {
        let reconcile =
            ReconciliationEngine::new(blobs.clone(), metadata.clone(), policy.clone());
        Self {
            blobs,
            metadata,
            policy,
            reconcile,
            in_flight: ExpiringMarkerSet::new(DEFAULT_MARKER_TTL),
            trash_root: DEFAULT_TRASH_ROOT.to_string(),
        }
    }

    pub fn with_trash_root(mut self, root: impl Into<String>) -> Self {
        self.trash_root = path_util::normalize(&root.into());
        self
    }

    pub fn with_marker_ttl(mut self, ttl: Duration) -> Self {
        self.in_flight = ExpiringMarkerSet::new(ttl);
        self
    }

    /// Normalize a record before any persistence call: clean the path and
    /// re-derive the original file name from it, so stored records never
    /// carry a denormalized path.
    pub fn format_record(mut record: ObjectRecord) -> ObjectRecord {
        record.path = path_util::normalize(&record.path);
        record.original_filename = path_util::file_name_from_path(&record.path).to_string();
        record
    }

    fn marker_key(record: &ObjectRecord) -> String {
        format!("{}\n{}", record.path, record.original_filename)
    }

    /// Metadata by id. No payload, no visibility gate.
    pub async fn get_by_id(&self, id: i64) -> IndexResult<ObjectRecord> {
        self.metadata
            .find_by_id(id)
            .await?
            .ok_or_else(|| IndexError::NotFound(format!("object {id} not found")))
    }

    /// Metadata at a path, through the bounded read-after-write retry and
    /// the visibility gate. `None` when nothing exists on either store.
    pub async fn get_record_by_path(
        &self,
        path: &str,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        let path = path_util::normalize(path);
        self.reconcile
            .lookup_by_path_with_retry(&path, principal_id, granted)
            .await
    }

    /// Metadata for `/{principal}/{fileName}`.
    pub async fn get_record_by_name(
        &self,
        file_name: &str,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        self.get_record_by_path(&format!("/{principal_id}/{file_name}"), principal_id, granted)
            .await
    }

    /// First metadata hit among id, path, and name, in that order.
    pub async fn get_record_by_criteria(
        &self,
        id: Option<i64>,
        path: Option<&str>,
        file_name: Option<&str>,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        if let Some(id) = id {
            let record = self.get_by_id(id).await?;
            if !self.policy.is_visible(&record, principal_id, granted) {
                return Err(IndexError::NotFound("file not found".to_string()));
            }
            return Ok(Some(record));
        }

        if let Some(path) = path
            && let Some(record) = self.get_record_by_path(path, principal_id, granted).await?
        {
            return Ok(Some(record));
        }

        if let Some(file_name) = file_name
            && let Some(record) = self
                .get_record_by_name(file_name, principal_id, granted)
                .await?
        {
            return Ok(Some(record));
        }

        Ok(None)
    }

    /// [`get_record_by_path`] plus payload hydration.
    pub async fn get_by_path(
        &self,
        path: &str,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        match self.get_record_by_path(path, principal_id, granted).await? {
            Some(record) => Ok(Some(self.hydrate(record).await?)),
            None => Ok(None),
        }
    }

    /// [`get_record_by_name`] plus payload hydration.
    pub async fn get_by_name(
        &self,
        file_name: &str,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        match self
            .get_record_by_name(file_name, principal_id, granted)
            .await?
        {
            Some(record) => Ok(Some(self.hydrate(record).await?)),
            None => Ok(None),
        }
    }

    /// [`get_record_by_criteria`] plus payload hydration.
    pub async fn get_by_criteria(
        &self,
        id: Option<i64>,
        path: Option<&str>,
        file_name: Option<&str>,
        principal_id: i64,
        granted: &[Permission],
    ) -> IndexResult<Option<ObjectRecord>> {
        match self
            .get_record_by_criteria(id, path, file_name, principal_id, granted)
            .await?
        {
            Some(record) => Ok(Some(self.hydrate(record).await?)),
            None => Ok(None),
        }
    }

    /// Raw payload bytes for a record.
    pub async fn fetch_payload(&self, record: &ObjectRecord) -> IndexResult<Bytes> {
        Ok(self.blobs.read_all(&record.path).await?)
    }

    /// Attach the payload to a record fetched from metadata. A record whose
    /// blob vanished out of band is deleted and surfaces NotFound; a record
    /// whose write is still bracketed by a marker keeps `payload` empty
    /// rather than re-fetching half-written bytes.
    async fn hydrate(&self, mut record: ObjectRecord) -> IndexResult<ObjectRecord> {
        if !self.blobs.exists(&record.path).await? {
            self.delete(&record).await?;
            return Err(IndexError::NotFound("file not found".to_string()));
        }
        if !self.in_flight.contains(&Self::marker_key(&record)) {
            record.payload = Some(self.fetch_payload(&record).await?);
        }
        Ok(record)
    }

    /// Store a new object: metadata row plus blob write, marker-bracketed.
    pub async fn create(&self, record: ObjectRecord) -> IndexResult<ObjectRecord> {
        let mut record = Self::format_record(record);
        let payload = match record.payload.take() {
            Some(payload) if !payload.is_empty() => payload,
            _ => return Err(IndexError::BadInput("file is empty".to_string())),
        };

        record.owner_user_id = path_util::owner_id_from_path(&record.path)?;
        if record.content_type.is_none() {
            record.content_type = path_util::content_type_from_name(&record.original_filename);
        }
        record.size = payload.len() as i64;

        if self.exists(&record.path).await? {
            return Err(IndexError::Conflict(format!(
                "an object already exists at `{}`",
                record.path
            )));
        }

        // Reads racing this write must not fetch the payload until the blob
        // write completes. A failure in between leaves the marker to expire
        // on its own.
        let key = Self::marker_key(&record);
        self.in_flight.add(key.clone());

        let mut stored = self.metadata.insert(&record).await?;
        self.blobs
            .ensure_directory(&path_util::directory_of(&stored.path))
            .await?;
        self.blobs.write_all(&stored.path, &payload).await?;
        self.in_flight.remove(&key);

        stored.payload = Some(payload);
        Ok(stored)
    }

    /// Replace the content of an existing object, marker-bracketed.
    pub async fn replace(&self, id: i64, record: ObjectRecord) -> IndexResult<ObjectRecord> {
        let mut record = Self::format_record(record);
        let payload = match record.payload.take() {
            Some(payload) if !payload.is_empty() => payload,
            _ => return Err(IndexError::BadInput("file is empty".to_string())),
        };

        if !self.exists(&record.path).await? {
            return Err(IndexError::NotFound("file not found".to_string()));
        }

        record.id = Some(id);
        record.owner_user_id = path_util::owner_id_from_path(&record.path)?;
        if record.content_type.is_none() {
            record.content_type = path_util::content_type_from_name(&record.original_filename);
        }
        record.size = payload.len() as i64;

        let key = Self::marker_key(&record);
        self.in_flight.add(key.clone());

        let mut stored = self.metadata.update(&record).await?;
        self.blobs
            .ensure_directory(&path_util::directory_of(&stored.path))
            .await?;
        self.blobs.write_all(&stored.path, &payload).await?;
        self.in_flight.remove(&key);

        stored.payload = Some(payload);
        Ok(stored)
    }

    /// Apply a partial update. Only explicitly-set fields overwrite the
    /// original; a new file name moves the blob to the new path and may not
    /// change the name-derived content type.
    pub async fn patch(
        &self,
        id: i64,
        patch: ObjectRecordPatch,
        principal_id: i64,
    ) -> IndexResult<ObjectRecord> {
        let mut original = self.get_by_id(id).await?;
        if original.owner_user_id != principal_id {
            return Err(IndexError::NotFound("file not found".to_string()));
        }

        let owner_id = original.owner_user_id;
        let original_path = original.path.clone();

        let new_name = patch
            .original_filename
            .as_deref()
            .filter(|name| !name.is_empty());
        let new_path = new_name.map(|name| path_util::normalize(&format!("/{owner_id}/{name}")));

        if let (Some(name), Some(path)) = (new_name, new_path.as_deref()) {
            if let Some(new_type) = path_util::content_type_from_name(name)
                && original.content_type.as_deref() != Some(new_type.as_str())
            {
                return Err(IndexError::BadInput(
                    "new type can't differ from old type".to_string(),
                ));
            }
            if self.exists(path).await? {
                return Err(IndexError::Conflict(
                    "new file name or path already exists".to_string(),
                ));
            }

            original.original_filename = name.to_string();
            original.path = path.to_string();
        }
        if let Some(publicity) = patch.publicity {
            original.publicity = publicity;
        }
        original.owner_user_id = owner_id;

        let key = Self::marker_key(&original);
        self.in_flight.add(key.clone());

        if new_path.is_some() {
            self.blobs.rename(&original_path, &original.path).await?;
        }
        let updated = self.metadata.update(&original).await?;
        self.in_flight.remove(&key);

        Ok(updated)
    }

    /// Delete an object. The blob, when present, is moved under the trash
    /// root rather than destroyed, probing ` (n)` suffixes until a free
    /// name is found; the metadata row is removed either way.
    pub async fn delete(&self, record: &ObjectRecord) -> IndexResult<()> {
        let Some(id) = record.id else {
            return Err(IndexError::BadInput(
                "record has no store-assigned id".to_string(),
            ));
        };

        if self.blobs.exists(&record.path).await? {
            let owner_id = path_util::owner_id_from_path(&record.path)?;
            let base = format!(
                "{}/{}/{}",
                self.trash_root, owner_id, record.original_filename
            );
            self.blobs
                .ensure_directory(&path_util::directory_of(&base))
                .await?;

            let mut destination = base.clone();
            let mut count = 0;
            while self.blobs.exists(&destination).await? {
                count += 1;
                destination = path_util::with_collision_suffix(&base, count);
            }

            self.blobs.rename(&record.path, &destination).await?;
            debug!("moved deleted blob {} to {}", record.path, destination);
        }

        self.metadata.delete_by_id(id).await?;
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i64) -> IndexResult<()> {
        let record = self.get_by_id(id).await?;
        self.delete(&record).await
    }

    /// Blob existence at a path, with divergence repair on the way.
    pub async fn exists(&self, path: &str) -> IndexResult<bool> {
        let path = path_util::normalize(path);
        self.reconcile.confirm_exists(&path).await
    }

    pub async fn exists_by_name(&self, file_name: &str, owner_id: i64) -> IndexResult<bool> {
        self.exists(&format!("/{owner_id}/{file_name}")).await
    }

    /// Every record owned by `owner_id`. There is deliberately no unscoped
    /// listing.
    pub async fn list_by_owner(&self, owner_id: i64) -> IndexResult<Vec<ObjectRecord>> {
        Ok(self.metadata.find_all_by_owner(owner_id).await?)
    }

    /// Drop all write markers and stop their sweeper.
    pub fn shutdown(&self) {
        self.in_flight.clear();
        self.in_flight.shutdown();
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
        svc: ObjectStorageOrchestrator,
    }

    fn fixture() -> Fixture {
        let blobs = Arc::new(MemoryBlobStore::default());
        let metadata = Arc::new(MemoryMetadataStore::default());
        let svc = ObjectStorageOrchestrator::new(
            blobs.clone(),
            metadata.clone(),
            Arc::new(OwnerOrPublicPolicy),
        );
        Fixture {
            blobs,
            metadata,
            svc,
        }
    }

    fn upload(path: &str, payload: &[u8]) -> ObjectRecord {
        let mut record = ObjectRecord::empty_at(path);
        record.payload = Some(Bytes::copy_from_slice(payload));
        record
    }

    #[tokio::test]
    async fn create_then_read_round_trip() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"hello")).await.unwrap();

        assert!(stored.id.is_some());
        assert_eq!(stored.owner_user_id, 7);
        assert_eq!(stored.size, 5);
        assert_eq!(stored.content_type.as_deref(), Some("text/plain"));
        assert!(f.svc.exists("/7/a.txt").await.unwrap());

        let fetched = f
            .svc
            .get_by_path("/7/a.txt", 7, &[])
            .await
            .unwrap()
            .expect("record");
        assert_eq!(fetched.payload.as_deref(), Some(b"hello".as_ref()));
    }

    #[tokio::test]
    async fn create_normalizes_the_path_first() {
        let f = fixture();
        let stored = f.svc.create(upload("7//a.txt/", b"x")).await.unwrap();
        assert_eq!(stored.path, "/7/a.txt");
        assert_eq!(stored.original_filename, "a.txt");
    }

    #[tokio::test]
    async fn create_rejects_empty_payload() {
        let f = fixture();
        let mut record = upload("/7/a.txt", b"");
        assert!(matches!(
            f.svc.create(record.clone()).await.unwrap_err(),
            IndexError::BadInput(_)
        ));
        record.payload = None;
        assert!(matches!(
            f.svc.create(record).await.unwrap_err(),
            IndexError::BadInput(_)
        ));
    }

    #[tokio::test]
    async fn create_rejects_occupied_path() {
        let f = fixture();
        f.svc.create(upload("/7/a.txt", b"one")).await.unwrap();
        assert!(matches!(
            f.svc.create(upload("/7/a.txt", b"two")).await.unwrap_err(),
            IndexError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn create_rejects_ownerless_path() {
        let f = fixture();
        assert!(matches!(
            f.svc.create(upload("/nobody/a.txt", b"x")).await.unwrap_err(),
            IndexError::MalformedPath(_)
        ));
    }

    #[tokio::test]
    async fn get_by_name_builds_the_owner_path() {
        let f = fixture();
        f.svc.create(upload("/7/a.txt", b"hello")).await.unwrap();

        let found = f.svc.get_by_name("a.txt", 7, &[]).await.unwrap();
        assert_eq!(found.unwrap().path, "/7/a.txt");
    }

    #[tokio::test]
    async fn criteria_prefers_id_then_path_then_name() {
        let f = fixture();
        let a = f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();
        f.svc.create(upload("/7/b.txt", b"b")).await.unwrap();

        let by_id = f
            .svc
            .get_record_by_criteria(a.id, Some("/7/b.txt"), None, 7, &[])
            .await
            .unwrap();
        assert_eq!(by_id.unwrap().path, "/7/a.txt");

        let by_path = f
            .svc
            .get_record_by_criteria(None, Some("/7/b.txt"), Some("a.txt"), 7, &[])
            .await
            .unwrap();
        assert_eq!(by_path.unwrap().path, "/7/b.txt");

        let by_name = f
            .svc
            .get_record_by_criteria(None, None, Some("a.txt"), 7, &[])
            .await
            .unwrap();
        assert_eq!(by_name.unwrap().path, "/7/a.txt");

        let none = f
            .svc
            .get_record_by_criteria(None, None, None, 7, &[])
            .await
            .unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn delete_moves_the_blob_to_trash() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"keep me")).await.unwrap();

        f.svc.delete_by_id(stored.id.unwrap()).await.unwrap();

        assert!(f.metadata.all().is_empty());
        assert_eq!(f.blobs.blob_paths(), ["/Trash/7/a.txt"]);
        // The bytes survive at the trash destination.
        assert_eq!(
            f.blobs.read_all("/Trash/7/a.txt").await.unwrap().as_ref(),
            b"keep me"
        );
    }

    #[tokio::test]
    async fn second_delete_of_same_name_gets_a_counter_suffix() {
        let f = fixture();
        let first = f.svc.create(upload("/7/a.txt", b"one")).await.unwrap();
        f.svc.delete_by_id(first.id.unwrap()).await.unwrap();

        let second = f.svc.create(upload("/7/a.txt", b"two")).await.unwrap();
        f.svc.delete_by_id(second.id.unwrap()).await.unwrap();

        assert_eq!(
            f.blobs.blob_paths(),
            ["/Trash/7/a (1).txt", "/Trash/7/a.txt"]
        );
        assert_eq!(
            f.blobs.read_all("/Trash/7/a (1).txt").await.unwrap().as_ref(),
            b"two"
        );
    }

    #[tokio::test]
    async fn delete_without_blob_removes_only_the_row() {
        let f = fixture();
        let mut record = ObjectRecord::empty_at("/7/gone.txt");
        record.original_filename = "gone.txt".to_string();
        record.owner_user_id = 7;
        let record = f.metadata.seed(record);

        f.svc.delete(&record).await.unwrap();
        assert!(f.metadata.all().is_empty());
        assert!(f.blobs.blob_paths().is_empty());
    }

    #[tokio::test]
    async fn read_of_vanished_blob_reaps_and_reports_not_found() {
        let f = fixture();
        f.svc.create(upload("/7/a.txt", b"x")).await.unwrap();
        f.blobs.drop_blob("/7/a.txt");

        let err = f.svc.get_by_path("/7/a.txt", 7, &[]).await.unwrap_err();
        assert!(matches!(err, IndexError::NotFound(_)));
        assert!(f.metadata.all().is_empty());
    }

    #[tokio::test]
    async fn replace_overwrites_content_and_size() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"old")).await.unwrap();

        let replaced = f
            .svc
            .replace(stored.id.unwrap(), upload("/7/a.txt", b"newer"))
            .await
            .unwrap();

        assert_eq!(replaced.size, 5);
        assert_eq!(
            f.blobs.read_all("/7/a.txt").await.unwrap().as_ref(),
            b"newer"
        );
    }

    #[tokio::test]
    async fn replace_requires_an_existing_object() {
        let f = fixture();
        assert!(matches!(
            f.svc.replace(1, upload("/7/ghost.txt", b"x")).await.unwrap_err(),
            IndexError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn patch_renames_and_moves_the_blob() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"data")).await.unwrap();

        let patch = ObjectRecordPatch {
            original_filename: Some("b.txt".to_string()),
            publicity: None,
        };
        let updated = f.svc.patch(stored.id.unwrap(), patch, 7).await.unwrap();

        assert_eq!(updated.path, "/7/b.txt");
        assert_eq!(updated.original_filename, "b.txt");
        assert_eq!(updated.owner_user_id, 7);
        assert_eq!(f.blobs.blob_paths(), ["/7/b.txt"]);
    }

    #[tokio::test]
    async fn patch_rejects_a_type_change() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.png", b"png")).await.unwrap();

        let patch = ObjectRecordPatch {
            original_filename: Some("a.txt".to_string()),
            publicity: None,
        };
        let err = f.svc.patch(stored.id.unwrap(), patch, 7).await.unwrap_err();
        assert!(matches!(err, IndexError::BadInput(_)));
    }

    #[tokio::test]
    async fn patch_rejects_an_occupied_target() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();
        f.svc.create(upload("/7/b.txt", b"b")).await.unwrap();

        let patch = ObjectRecordPatch {
            original_filename: Some("b.txt".to_string()),
            publicity: None,
        };
        let err = f.svc.patch(stored.id.unwrap(), patch, 7).await.unwrap_err();
        assert!(matches!(err, IndexError::Conflict(_)));
    }

    #[tokio::test]
    async fn patch_by_a_stranger_is_hidden() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();

        let patch = ObjectRecordPatch {
            original_filename: None,
            publicity: Some(true),
        };
        let err = f.svc.patch(stored.id.unwrap(), patch, 99).await.unwrap_err();
        assert!(matches!(err, IndexError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_of_publicity_alone_leaves_the_blob_in_place() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();

        let patch = ObjectRecordPatch {
            original_filename: None,
            publicity: Some(true),
        };
        let updated = f.svc.patch(stored.id.unwrap(), patch, 7).await.unwrap();

        assert!(updated.publicity);
        assert_eq!(updated.path, "/7/a.txt");
        assert_eq!(f.blobs.blob_paths(), ["/7/a.txt"]);
    }

    #[tokio::test]
    async fn marker_suppresses_payload_hydration() {
        let f = fixture();
        let stored = f.svc.create(upload("/7/a.txt", b"data")).await.unwrap();
        assert_eq!(f.blobs.read_count(), 0);

        // Simulate a read landing inside the write window.
        let key = ObjectStorageOrchestrator::marker_key(&stored);
        f.svc.in_flight.add(key.clone());

        let suppressed = f
            .svc
            .get_by_path("/7/a.txt", 7, &[])
            .await
            .unwrap()
            .expect("record");
        assert!(suppressed.payload.is_none());
        assert_eq!(f.blobs.read_count(), 0);

        // Once the window closes, hydration resumes.
        f.svc.in_flight.remove(&key);
        let hydrated = f
            .svc
            .get_by_path("/7/a.txt", 7, &[])
            .await
            .unwrap()
            .expect("record");
        assert_eq!(hydrated.payload.as_deref(), Some(b"data".as_ref()));
        assert_eq!(f.blobs.read_count(), 1);
    }

    #[tokio::test]
    async fn exists_by_name_scopes_to_the_owner() {
        let f = fixture();
        f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();

        assert!(f.svc.exists_by_name("a.txt", 7).await.unwrap());
        assert!(!f.svc.exists_by_name("a.txt", 8).await.unwrap());
    }

    #[tokio::test]
    async fn owner_listing_returns_only_that_owner() {
        let f = fixture();
        f.svc.create(upload("/7/a.txt", b"a")).await.unwrap();
        f.svc.create(upload("/8/b.txt", b"b")).await.unwrap();

        let records = f.svc.list_by_owner(7).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "/7/a.txt");
    }
}
