// src/storage/uploader.rs
use crate::storage::{ImageFile, ImageStore, UploadedImage, DEFAULT_FOLDER};
use thiserror::Error;

/// User-facing upload/removal failures. The messages are shown verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("You can only upload a maximum of {max} images.")]
    TooMany { max: usize },
    #[error("Failed to upload images. Please try again.")]
    UploadFailed,
    #[error("Failed to remove image. Please try again.")]
    RemoveFailed,
    #[error("That image is not part of this listing.")]
    UnknownImage,
}

/// Outcome of one batch: what made it to storage, and whether the batch
/// stopped early.
#[derive(Debug, Default, PartialEq)]
pub struct BatchReport {
    pub uploaded: Vec<UploadedImage>,
    pub error: Option<UploadError>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Progress shown before uploading file `index` of `total`.
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((index as f64 / total as f64) * 100.0).round() as u8
}

/// The admin's working set of listing images.
///
/// Uploads run one file at a time in input order. The first failure stops
/// the batch; files already uploaded stay recorded.
#[derive(Debug, Clone)]
pub struct ImageUploader {
    images: Vec<UploadedImage>,
    max_images: usize,
    folder: String,
}

impl ImageUploader {
    pub fn new(max_images: usize) -> Self {
        Self {
            images: Vec::new(),
            max_images,
            folder: DEFAULT_FOLDER.to_string(),
        }
    }

    pub fn with_images(mut self, images: Vec<UploadedImage>) -> Self {
        self.images = images;
        self
    }

    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn max_images(&self) -> usize {
        self.max_images
    }

    pub fn is_full(&self) -> bool {
        self.images.len() >= self.max_images
    }

    /// Rejects the whole batch up front when it would exceed the limit.
    pub fn upload_batch(
        &mut self,
        store: &ImageStore,
        files: &[ImageFile],
    ) -> Result<BatchReport, UploadError> {
        if files.is_empty() {
            return Ok(BatchReport::default());
        }

        if self.images.len() + files.len() > self.max_images {
            return Err(UploadError::TooMany {
                max: self.max_images,
            });
        }

        let mut report = BatchReport::default();

        for (i, file) in files.iter().enumerate() {
            tracing::debug!(
                file = %file.name,
                progress = progress_percent(i, files.len()),
                "uploading image"
            );

            match store.upload_image(file, &self.folder) {
                Ok(image) => {
                    self.images.push(image.clone());
                    report.uploaded.push(image);
                }
                Err(e) => {
                    tracing::error!(
                        file = %file.name,
                        uploaded = report.uploaded.len(),
                        error = %e,
                        "image batch stopped"
                    );
                    report.error = Some(UploadError::UploadFailed);
                    break;
                }
            }
        }

        Ok(report)
    }

    /// Delete from storage first; the local entry only goes away on success.
    pub fn remove(&mut self, store: &ImageStore, path: &str) -> Result<UploadedImage, UploadError> {
        let index = self
            .images
            .iter()
            .position(|img| img.path == path)
            .ok_or(UploadError::UnknownImage)?;

        store.delete_image(path).map_err(|e| {
            tracing::error!(path, error = %e, "removing image failed");
            UploadError::RemoveFailed
        })?;

        Ok(self.images.remove(index))
    }
}
