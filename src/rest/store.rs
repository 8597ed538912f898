use super::{ensure_success, RestClient};
use crate::intake::traits::ListingStore;
use crate::models::BusinessRow;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

/// Row inserts over the `/rest/v1` HTTP API
#[derive(Debug, Clone)]
pub struct RestStore {
    rest: RestClient,
}

impl RestStore {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.rest.base_url(), urlencoding::encode(table))
    }
}

#[async_trait]
impl ListingStore for RestStore {
    async fn insert(&self, table: &str, row: &BusinessRow) -> Result<()> {
        let url = self.table_url(table);
        debug!("POST {}", url);

        let response = self
            .rest
            .post(&url)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await
            .with_context(|| format!("Failed to insert into {}", table))?;

        ensure_success(response, "Insert").await?;
        Ok(())
    }
}
