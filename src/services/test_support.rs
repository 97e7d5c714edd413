//! In-memory store doubles for service tests, with call counters so tests
//! can observe which collaborator calls an operation triggered.

use crate::{
    metadata::{MetaError, MetaResult, MetadataStore},
    models::record::ObjectRecord,
    storage::{BlobError, BlobResult, BlobStore},
};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use std::{
    collections::{HashMap, HashSet},
    io::{Error, ErrorKind},
    sync::atomic::{AtomicI64, AtomicUsize, Ordering},
};

#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Bytes>>,
    dirs: Mutex<HashSet<String>>,
    read_calls: AtomicUsize,
}

impl MemoryBlobStore {
    pub fn put(&self, path: &str, data: &[u8]) {
        self.blobs
            .lock()
            .insert(path.to_string(), Bytes::copy_from_slice(data));
    }

    pub fn drop_blob(&self, path: &str) {
        self.blobs.lock().remove(path);
    }

    pub fn read_count(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn blob_paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.blobs.lock().keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn exists(&self, path: &str) -> BlobResult<bool> {
        Ok(self.blobs.lock().contains_key(path) || self.dirs.lock().contains(path))
    }

    async fn read_all(&self, path: &str) -> BlobResult<Bytes> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        self.blobs
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| BlobError::io(path, Error::new(ErrorKind::NotFound, "missing blob")))
    }

    async fn write_all(&self, path: &str, data: &[u8]) -> BlobResult<()> {
        self.put(path, data);
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> BlobResult<()> {
        let mut blobs = self.blobs.lock();
        match blobs.remove(from) {
            Some(data) => {
                blobs.insert(to.to_string(), data);
                Ok(())
            }
            None => Err(BlobError::io(
                from,
                Error::new(ErrorKind::NotFound, "missing blob"),
            )),
        }
    }

    async fn ensure_directory(&self, path: &str) -> BlobResult<()> {
        self.dirs.lock().insert(path.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryMetadataStore {
    records: Mutex<Vec<ObjectRecord>>,
    next_id: AtomicI64,
}

impl MemoryMetadataStore {
    pub fn all(&self) -> Vec<ObjectRecord> {
        self.records.lock().clone()
    }

    pub fn seed(&self, record: ObjectRecord) -> ObjectRecord {
        let mut stored = record;
        stored.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        stored.payload = None;
        self.records.lock().push(stored.clone());
        stored
    }
}

#[async_trait]
impl MetadataStore for MemoryMetadataStore {
    async fn insert(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord> {
        {
            let records = self.records.lock();
            if records.iter().any(|r| r.path == record.path) {
                return Err(MetaError::DuplicatePath(record.path.clone()));
            }
        }
        Ok(self.seed(record.clone()))
    }

    async fn update(&self, record: &ObjectRecord) -> MetaResult<ObjectRecord> {
        let mut records = self.records.lock();
        if records
            .iter()
            .any(|r| r.id != record.id && r.path == record.path)
        {
            return Err(MetaError::DuplicatePath(record.path.clone()));
        }
        let slot = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or(MetaError::Sqlx(sqlx::Error::RowNotFound))?;
        let mut stored = record.clone();
        stored.payload = None;
        *slot = stored.clone();
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> MetaResult<()> {
        self.records.lock().retain(|r| r.id != Some(id));
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> MetaResult<Option<ObjectRecord>> {
        Ok(self
            .records
            .lock()
            .iter()
            .find(|r| r.id == Some(id))
            .cloned())
    }

    async fn find_by_path(&self, path: &str) -> MetaResult<Vec<ObjectRecord>> {
        Ok(self
            .records
            .lock()
            .iter()
            .filter(|r| r.path == path)
            .cloned()
            .collect())
    }

    async fn find_all_by_owner(&self, owner_id: i64) -> MetaResult<Vec<ObjectRecord>> {
        let mut records: Vec<_> = self
            .records
            .lock()
            .iter()
            .filter(|r| r.owner_user_id == owner_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}
