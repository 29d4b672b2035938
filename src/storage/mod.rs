// src/storage/mod.rs
mod optimize;
mod supabase;
mod uploader;

pub use optimize::{ImageOptions, ImageProxy};
pub use supabase::SupabaseStorage;
pub use uploader::{progress_percent, ImageUploader, UploadError};

use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// 10 MB per object.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_FOLDER: &str = "listings";
pub const CACHE_CONTROL_SECS: u32 = 3600;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage request failed: {0}")]
    Request(String),
    #[error("storage API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("unexpected storage response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BucketInfo {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone)]
pub struct BucketOptions {
    pub public: bool,
    pub file_size_limit: u64,
}

#[derive(Debug, Clone)]
pub struct UploadOptions {
    pub cache_control: u32,
    pub upsert: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            cache_control: CACHE_CONTROL_SECS,
            upsert: false,
        }
    }
}

/// A file received from the browser, fully buffered.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Storage key inside the bucket.
    pub path: String,
    pub url: String,
}

/// Object-storage backend. `SupabaseStorage` talks HTTP; tests use an
/// in-memory store.
pub trait ObjectStore: Send + Sync {
    fn list_buckets(&self) -> Result<Vec<BucketInfo>, StorageError>;

    fn create_bucket(&self, name: &str, opts: &BucketOptions) -> Result<(), StorageError>;

    fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &ImageFile,
        opts: &UploadOptions,
    ) -> Result<(), StorageError>;

    fn remove(&self, bucket: &str, keys: &[String]) -> Result<(), StorageError>;

    fn public_url(&self, bucket: &str, key: &str) -> String;
}

/// Listing-image operations on a single bucket.
#[derive(Clone)]
pub struct ImageStore {
    backend: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ImageStore {
    pub fn new(backend: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            backend,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Create the bucket (public, 10 MB per file) unless it already exists.
    /// A failed listing counts as "not found" and creation is attempted.
    pub fn initialize(&self) -> Result<(), StorageError> {
        let exists = match self.backend.list_buckets() {
            Ok(buckets) => buckets.iter().any(|b| b.name == self.bucket),
            Err(e) => {
                tracing::warn!(error = %e, "listing storage buckets failed");
                false
            }
        };
        if exists {
            return Ok(());
        }

        let opts = BucketOptions {
            public: true,
            file_size_limit: MAX_FILE_BYTES,
        };
        self.backend
            .create_bucket(&self.bucket, &opts)
            .map_err(|e| {
                tracing::error!(bucket = %self.bucket, error = %e, "creating storage bucket failed");
                e
            })?;

        tracing::info!(bucket = %self.bucket, "storage bucket created");
        Ok(())
    }

    /// Upload under `{folder}/{uuid}.{ext}` without overwriting.
    pub fn upload_image(&self, file: &ImageFile, folder: &str) -> Result<UploadedImage, StorageError> {
        let key = object_key(folder, &file.name, Uuid::new_v4());

        self.backend
            .upload(&self.bucket, &key, file, &UploadOptions::default())
            .map_err(|e| {
                tracing::error!(file = %file.name, error = %e, "image upload failed");
                e
            })?;

        let url = self.backend.public_url(&self.bucket, &key);
        tracing::info!(path = %key, bytes = file.bytes.len(), "image uploaded");

        Ok(UploadedImage { path: key, url })
    }

    pub fn delete_image(&self, path: &str) -> Result<(), StorageError> {
        self.backend
            .remove(&self.bucket, &[path.to_string()])
            .map_err(|e| {
                tracing::error!(path, error = %e, "image delete failed");
                e
            })?;

        tracing::info!(path, "image deleted");
        Ok(())
    }
}

/// Extension is whatever follows the last '.', or the whole name when
/// there is no dot.
pub fn object_key(folder: &str, file_name: &str, id: Uuid) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or(file_name);
    format!("{folder}/{id}.{ext}")
}
