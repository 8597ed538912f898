use crate::intake::traits::ObjectStorage;
use crate::intake::types::{AssetKind, UploadOptions};
use crate::models::SelectedFile;
use futures::future::join_all;
use thiserror::Error;
use tracing::{debug, warn};

/// An upload that the storage collaborator refused or could not complete
#[derive(Debug, Error)]
#[error("{source}")]
pub struct UploadFailure {
    pub path: String,
    #[source]
    pub source: anyhow::Error,
}

/// Upload one file and return its public URL
pub async fn upload_file(
    storage: &dyn ObjectStorage,
    bucket: &str,
    path: &str,
    file: &SelectedFile,
    options: &UploadOptions,
) -> Result<String, UploadFailure> {
    debug!("Uploading {} ({} bytes) to {}/{}", file.name, file.size(), bucket, path);

    let stored = storage
        .upload(bucket, path, file, options)
        .await
        .map_err(|source| UploadFailure {
            path: path.to_string(),
            source,
        })?;

    Ok(storage.public_url(bucket, &stored))
}

/// Per-file results of a concurrent upload batch, in selection order
#[derive(Debug)]
pub struct BatchReport {
    pub results: Vec<Result<String, UploadFailure>>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.is_err()).count()
    }

    pub fn succeeded(&self) -> usize {
        self.total() - self.failed()
    }

    /// Public URLs of the uploads that succeeded
    pub fn urls(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter_map(|r| r.as_ref().ok().map(String::as_str))
            .collect()
    }

    /// All URLs when every upload succeeded, otherwise the first failure
    pub fn into_urls(self) -> Result<Vec<String>, UploadFailure> {
        self.results.into_iter().collect()
    }
}

/// Upload every file concurrently and wait for all of them.
///
/// Each file gets `{folder}/{owner}/{millis}_{index}_{name}`. Failed uploads
/// do not cancel the others, and completed uploads are never rolled back.
pub async fn upload_batch(
    storage: &dyn ObjectStorage,
    bucket: &str,
    kind: AssetKind,
    owner_id: &str,
    timestamp_millis: i64,
    files: &[SelectedFile],
    options: &UploadOptions,
) -> BatchReport {
    let paths: Vec<String> = files
        .iter()
        .enumerate()
        .map(|(i, f)| kind.path(owner_id, timestamp_millis, Some(i), &f.name))
        .collect();

    let uploads = files
        .iter()
        .zip(paths.iter())
        .map(|(file, path)| upload_file(storage, bucket, path, file, options));

    let report = BatchReport {
        results: join_all(uploads).await,
    };

    if report.failed() > 0 {
        warn!(
            "{} of {} {} uploads failed",
            report.failed(),
            report.total(),
            kind.folder()
        );
    }

    report
}
