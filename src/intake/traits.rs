use crate::intake::types::{Notice, Route, UploadOptions};
use crate::models::{BusinessRow, Identity, SelectedFile};
use anyhow::Result;
use async_trait::async_trait;

/// Object storage holding uploaded listing assets
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `file` at `path` inside `bucket`, returning the stored path.
    /// Fails when the path already exists and `options.upsert` is off.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        file: &SelectedFile,
        options: &UploadOptions,
    ) -> Result<String>;

    /// Public URL of a stored object
    fn public_url(&self, bucket: &str, stored_path: &str) -> String;
}

/// Relational store receiving the listing row
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn insert(&self, table: &str, row: &BusinessRow) -> Result<()>;
}

/// Source of the currently signed-in account
pub trait IdentityProvider: Send + Sync {
    fn current(&self) -> Option<Identity>;
}

/// Shows transient messages to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Client-side redirection
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
