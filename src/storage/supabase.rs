// src/storage/supabase.rs
use crate::storage::{BucketInfo, BucketOptions, ImageFile, ObjectStore, StorageError, UploadOptions};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Blocking client for a Supabase-compatible storage REST API.
pub struct SupabaseStorage {
    client: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Deserialize)]
struct BucketRow {
    name: String,
    #[serde(default)]
    public: bool,
}

#[derive(Serialize)]
struct CreateBucket<'a> {
    id: &'a str,
    name: &'a str,
    public: bool,
    file_size_limit: u64,
}

#[derive(Serialize)]
struct RemoveObjects<'a> {
    prefixes: &'a [String],
}

impl SupabaseStorage {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, StorageError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| StorageError::Request(format!("invalid storage url {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| StorageError::Request(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// `{base}/storage/v1/{segments...}`; every segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(["storage", "v1"]);
            for segment in segments {
                path.extend(segment.split('/'));
            }
        }
        url
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, StorageError> {
        let resp = self
            .authed(req)
            .send()
            .map_err(|e| StorageError::Request(e.to_string()))?;

        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status().as_u16();
        let message = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        Err(StorageError::Api { status, message })
    }
}

impl ObjectStore for SupabaseStorage {
    fn list_buckets(&self) -> Result<Vec<BucketInfo>, StorageError> {
        let resp = self.send(self.client.get(self.endpoint(&["bucket"])))?;
        let rows: Vec<BucketRow> = resp
            .json()
            .map_err(|e| StorageError::Decode(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|r| BucketInfo {
                name: r.name,
                public: r.public,
            })
            .collect())
    }

    fn create_bucket(&self, name: &str, opts: &BucketOptions) -> Result<(), StorageError> {
        let body = CreateBucket {
            id: name,
            name,
            public: opts.public,
            file_size_limit: opts.file_size_limit,
        };
        self.send(self.client.post(self.endpoint(&["bucket"])).json(&body))?;
        Ok(())
    }

    fn upload(
        &self,
        bucket: &str,
        key: &str,
        file: &ImageFile,
        opts: &UploadOptions,
    ) -> Result<(), StorageError> {
        let content_type = file
            .content_type
            .clone()
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

        let req = self
            .client
            .post(self.endpoint(&["object", bucket, key]))
            .header("Content-Type", content_type)
            .header("cache-control", format!("max-age={}", opts.cache_control))
            .header("x-upsert", opts.upsert.to_string())
            .body(file.bytes.clone());

        self.send(req)?;
        Ok(())
    }

    fn remove(&self, bucket: &str, keys: &[String]) -> Result<(), StorageError> {
        let body = RemoveObjects { prefixes: keys };
        self.send(
            self.client
                .delete(self.endpoint(&["object", bucket]))
                .json(&body),
        )?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        self.endpoint(&["object", "public", bucket, key]).to_string()
    }
}
