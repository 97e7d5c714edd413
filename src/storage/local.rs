//! Local-disk blob backend.
//!
//! Logical paths map one-to-one onto a directory tree beneath `root`.
//! Writes go through a temp file and an atomic rename so readers never
//! observe a half-written payload.

use crate::storage::{BlobError, BlobResult, BlobStore};
use async_trait::async_trait;
use bytes::Bytes;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{self, File},
    io::AsyncWriteExt,
};
use tracing::debug;
use uuid::Uuid;

pub struct LocalDiskStore {
    root: PathBuf,
}

impl LocalDiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a logical path into the root directory. Rejects `..` segments so
    /// a hostile path cannot climb out of the root.
    fn resolve(&self, path: &str) -> BlobResult<PathBuf> {
        let mut resolved = self.root.clone();
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(BlobError::InvalidPath(path.to_string())),
                segment => resolved.push(segment),
            }
        }
        Ok(resolved)
    }

    async fn create_parent(&self, target: &Path, logical: &str) -> BlobResult<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| BlobError::io(logical, err))?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for LocalDiskStore {
    async fn exists(&self, path: &str) -> BlobResult<bool> {
        let target = self.resolve(path)?;
        fs::try_exists(&target)
            .await
            .map_err(|err| BlobError::io(path, err))
    }

    async fn read_all(&self, path: &str) -> BlobResult<Bytes> {
        let target = self.resolve(path)?;
        let data = fs::read(&target)
            .await
            .map_err(|err| BlobError::io(path, err))?;
        Ok(Bytes::from(data))
    }

    async fn write_all(&self, path: &str, data: &[u8]) -> BlobResult<()> {
        let target = self.resolve(path)?;
        self.create_parent(&target, path).await?;

        // Stage into a temp file, fsync, then rename into place.
        let parent = target.parent().unwrap_or(&self.root).to_path_buf();
        let tmp_path = parent.join(format!(".tmp-{}", Uuid::new_v4()));
        let result: std::io::Result<()> = async {
            let mut file = File::create(&tmp_path).await?;
            file.write_all(data).await?;
            file.flush().await?;
            file.sync_all().await?;
            Ok(())
        }
        .await;
        if let Err(err) = result {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(BlobError::io(path, err));
        }

        if let Err(err) = fs::rename(&tmp_path, &target).await {
            if err.kind() == ErrorKind::AlreadyExists {
                fs::remove_file(&target)
                    .await
                    .map_err(|err| BlobError::io(path, err))?;
                fs::rename(&tmp_path, &target)
                    .await
                    .map_err(|err| BlobError::io(path, err))?;
            } else {
                let _ = fs::remove_file(&tmp_path).await;
                return Err(BlobError::io(path, err));
            }
        }
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> BlobResult<()> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;
        self.create_parent(&target, to).await?;
        fs::rename(&source, &target)
            .await
            .map_err(|err| BlobError::io(from, err))?;
        debug!("moved blob {} -> {}", from, to);
        Ok(())
    }

    async fn ensure_directory(&self, path: &str) -> BlobResult<()> {
        let target = self.resolve(path)?;
        fs::create_dir_all(&target)
            .await
            .map_err(|err| BlobError::io(path, err))
    }
}
