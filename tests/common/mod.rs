// tests/common/mod.rs

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use business_listing::intake::{
    Collaborators, FixedIdentity, ListingForm, ListingStore, Navigator, Notice, Notifier,
    ObjectStorage, Route, UploadOptions,
};
use business_listing::models::{BusinessCategory, BusinessRow, SelectedFile, TextField};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Storage fake: records every upload and fails those whose path contains
/// one of `fail_on`.
#[derive(Default)]
pub struct RecordingStorage {
    pub uploads: Mutex<Vec<String>>,
    pub fail_on: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingStorage {
    pub fn paths(&self) -> Vec<String> {
        self.uploads.lock().expect("uploads lock").clone()
    }

    pub fn fail_on(&self, fragment: &str) {
        self.fail_on
            .lock()
            .expect("fail_on lock")
            .push(fragment.to_string());
    }
}

#[async_trait]
impl ObjectStorage for RecordingStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        _file: &SelectedFile,
        options: &UploadOptions,
    ) -> Result<String> {
        assert_eq!(bucket, "business-assets");
        assert!(!options.upsert);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.uploads.lock().expect("uploads lock").push(path.to_string());

        let failing = self
            .fail_on
            .lock()
            .expect("fail_on lock")
            .iter()
            .any(|f| path.contains(f.as_str()));
        if failing {
            bail!("The resource already exists");
        }
        Ok(path.to_string())
    }

    fn public_url(&self, bucket: &str, stored_path: &str) -> String {
        format!("https://cdn.test/{}/{}", bucket, stored_path)
    }
}

/// Store fake: records inserted rows, or fails with `error` when set
#[derive(Default)]
pub struct RecordingStore {
    pub rows: Mutex<Vec<(String, BusinessRow)>>,
    pub error: Mutex<Option<String>>,
}

impl RecordingStore {
    pub fn rows(&self) -> Vec<BusinessRow> {
        self.rows
            .lock()
            .expect("rows lock")
            .iter()
            .map(|(_, row)| row.clone())
            .collect()
    }

    pub fn attempts(&self) -> usize {
        self.rows.lock().expect("rows lock").len()
    }

    pub fn fail_with(&self, message: &str) {
        *self.error.lock().expect("error lock") = Some(message.to_string());
    }
}

#[async_trait]
impl ListingStore for RecordingStore {
    async fn insert(&self, table: &str, row: &BusinessRow) -> Result<()> {
        self.rows
            .lock()
            .expect("rows lock")
            .push((table.to_string(), row.clone()));
        if let Some(message) = self.error.lock().expect("error lock").clone() {
            bail!(message);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notices lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notices lock").push(notice);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().expect("routes lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().expect("routes lock").push(route);
    }
}

pub struct Harness {
    pub storage: Arc<RecordingStorage>,
    pub store: Arc<RecordingStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    identity: FixedIdentity,
}

impl Harness {
    pub fn signed_in(user_id: &str) -> Self {
        Self::with_identity(FixedIdentity::signed_in(user_id))
    }

    pub fn anonymous() -> Self {
        Self::with_identity(FixedIdentity::anonymous())
    }

    fn with_identity(identity: FixedIdentity) -> Self {
        Self {
            storage: Arc::new(RecordingStorage::default()),
            store: Arc::new(RecordingStore::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            navigator: Arc::new(RecordingNavigator::default()),
            identity,
        }
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators {
            storage: self.storage.clone(),
            store: self.store.clone(),
            identity: Arc::new(self.identity.clone()),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
        }
    }

    pub fn form(&self) -> ListingForm {
        ListingForm::new(self.collaborators())
    }

    /// A form with every required field filled in
    pub fn filled_form(&self) -> ListingForm {
        let mut form = self.form();
        fill_required(&mut form);
        form
    }
}

pub fn fill_required(form: &mut ListingForm) {
    form.set_text(TextField::Name, "Bean There");
    form.set_text(TextField::Description, "Neighbourhood coffee bar");
    form.set_text(TextField::Phone, "(555) 123-4567");
    form.set_category(BusinessCategory::Restaurant);
}

pub fn image(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, "image/png", vec![7u8; size])
}

pub fn pdf(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, "application/pdf", vec![1u8; size])
}
