//! Blob backend contract.
//!
//! The core never touches a filesystem or object-storage SDK directly; it
//! speaks this trait, and backends translate logical `/{owner}/{file}`
//! paths into whatever layout they keep.

pub mod local;

use async_trait::async_trait;
use bytes::Bytes;
use std::io;
use thiserror::Error;

/// Blob backend failure, carrying the logical path that triggered it. The
/// core propagates these without retrying.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("blob i/o at `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("blob path `{0}` escapes the storage root")]
    InvalidPath(String),
}

impl BlobError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type BlobResult<T> = Result<T, BlobError>;

/// Raw byte storage for object payloads, addressed by normalized logical
/// paths.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Whether anything exists at `path`.
    async fn exists(&self, path: &str) -> BlobResult<bool>;

    /// Read the full payload at `path`.
    async fn read_all(&self, path: &str) -> BlobResult<Bytes>;

    /// Write (or overwrite) the full payload at `path`.
    async fn write_all(&self, path: &str, data: &[u8]) -> BlobResult<()>;

    /// Move a payload from `from` to `to`.
    async fn rename(&self, from: &str, to: &str) -> BlobResult<()>;

    /// Create the directory `path` (and parents) if missing.
    async fn ensure_directory(&self, path: &str) -> BlobResult<()>;
}
