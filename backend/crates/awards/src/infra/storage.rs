//! Supabase Storage Client
//!
//! Thin client over the Supabase storage REST API. Objects live in a single
//! public bucket; the public URL scheme is
//! `{base}/storage/v1/object/public/{bucket}/{name}`.

use crate::domain::repository::ObjectStorage;
use crate::error::{AwardError, AwardResult};

#[derive(Clone)]
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, name)
    }

    /// Public download URL for a stored object.
    pub fn public_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, name
        )
    }
}

impl ObjectStorage for SupabaseStorage {
    async fn put(&self, name: &str, bytes: Vec<u8>, content_type: &str) -> AwardResult<String> {
        let response = self
            .http
            .post(self.object_url(name))
            .bearer_auth(&self.service_key)
            .header("content-type", content_type)
            .header("cache-control", "3600")
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| AwardError::StorageUpload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AwardError::StorageUpload(format!(
                "{} {}",
                status, detail
            )));
        }

        Ok(self.public_url(name))
    }

    async fn remove(&self, name: &str) -> AwardResult<()> {
        let response = self
            .http
            .delete(self.object_url(name))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| AwardError::StorageUpload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AwardError::StorageUpload(format!(
                "{} {}",
                status, detail
            )));
        }

        Ok(())
    }
}
