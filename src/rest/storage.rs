use super::{encode_path, ensure_success, RestClient};
use crate::intake::traits::ObjectStorage;
use crate::intake::types::UploadOptions;
use crate::models::SelectedFile;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use tracing::debug;

/// Object storage over the `/storage/v1` HTTP API
#[derive(Debug, Clone)]
pub struct RestStorage {
    rest: RestClient,
}

impl RestStorage {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn object_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.rest.base_url(),
            urlencoding::encode(bucket),
            encode_path(path)
        )
    }
}

#[async_trait]
impl ObjectStorage for RestStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &SelectedFile,
        options: &UploadOptions,
    ) -> Result<String> {
        let url = self.object_url(bucket, path);
        debug!("POST {} ({} bytes)", url, file.size());

        let response = self
            .rest
            .post(&url)
            .header(CONTENT_TYPE, &file.content_type)
            .header(CACHE_CONTROL, format!("max-age={}", options.cache_control))
            .header("x-upsert", options.upsert.to_string())
            .body(file.bytes.clone())
            .send()
            .await
            .with_context(|| format!("Failed to upload {}", file.name))?;

        ensure_success(response, "Upload").await?;
        Ok(path.to_string())
    }

    fn public_url(&self, bucket: &str, stored_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.rest.base_url(),
            urlencoding::encode(bucket),
            encode_path(stored_path)
        )
    }
}
