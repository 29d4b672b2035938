// src/state.rs
use crate::auth::IdentityProvider;
use crate::config::Config;
use crate::db::Database;
use crate::domain::catalog::Catalog;
use crate::domain::dashboard::Dashboard;
use crate::forms::SubmissionStub;
use crate::storage::{ImageProxy, ImageStore, ImageUploader, ObjectStore, UploadedImage};
use std::sync::Arc;

/// Everything a request handler can reach. Built once in `main`.
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub catalog: Catalog,
    pub dashboard: Dashboard,
    pub images: ImageStore,
    pub proxy: ImageProxy,
    pub identity: Arc<dyn IdentityProvider>,
    pub submissions: SubmissionStub,
}

impl AppState {
    pub fn new(
        config: Config,
        db: Database,
        storage: Arc<dyn ObjectStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let images = ImageStore::new(storage, config.images_bucket.clone());
        let proxy = ImageProxy::new(&config.imgproxy_url, &config.supabase_url);
        let submissions = SubmissionStub::new(config.submit_delay);

        Self {
            config,
            db,
            catalog: Catalog::seeded(),
            dashboard: Dashboard::mock(),
            images,
            proxy,
            identity,
            submissions,
        }
    }

    pub fn uploader(&self, images: Vec<UploadedImage>) -> ImageUploader {
        ImageUploader::new(self.config.max_images).with_images(images)
    }

    /// Largest request body accepted: a full batch of max-size images plus slack.
    pub fn body_limit(&self) -> u64 {
        (self.config.max_images as u64)
            .saturating_mul(crate::storage::MAX_FILE_BYTES)
            .saturating_add(1024 * 1024)
    }
}
