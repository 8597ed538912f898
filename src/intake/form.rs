use crate::intake::files::{self, FileSlot, SelectionError};
use crate::intake::traits::{IdentityProvider, ListingStore, Navigator, Notifier, ObjectStorage};
use crate::intake::types::{
    AssetKind, Notice, Route, UploadOptions, DEFAULT_BUCKET, DEFAULT_TABLE, FALLBACK_ERROR,
    SUBMIT_LABEL, SUBMIT_LABEL_LOADING,
};
use crate::intake::upload::{self, BatchReport, UploadFailure};
use crate::models::{
    BusinessCategory, BusinessOption, BusinessRow, DraftError, Identity, ListingDraft,
    OnlineShopOption, PaymentOption, SelectedFile, TextField, UploadedAssets,
};
use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// External services the form talks to
#[derive(Clone)]
pub struct Collaborators {
    pub storage: Arc<dyn ObjectStorage>,
    pub store: Arc<dyn ListingStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
}

/// Where submissions are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSettings {
    pub bucket: String,
    pub table: String,
    pub upload: UploadOptions,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            table: DEFAULT_TABLE.to_string(),
            upload: UploadOptions::default(),
        }
    }
}

/// A failed upload or insert during submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Upload(#[from] UploadFailure),

    #[error("{}", first_failure(.report))]
    ProductImages { report: BatchReport },

    #[error("{0}")]
    Insert(#[source] anyhow::Error),
}

impl SubmitError {
    /// Message for the error notice, falling back to a generic text
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_ERROR.to_string()
        } else {
            message
        }
    }
}

fn first_failure(report: &BatchReport) -> String {
    report
        .results
        .iter()
        .find_map(|r| r.as_ref().err())
        .map(|f| f.to_string())
        .unwrap_or_default()
}

/// How a call to [`ListingForm::submit`] ended
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A previous submission is still running; nothing was done
    Busy,
    /// A required field is missing or malformed; nothing was sent
    Incomplete(DraftError),
    /// Nobody is signed in; the user was sent to sign in
    SignInRequired,
    Listed(BusinessRow),
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_listed(&self) -> bool {
        matches!(self, SubmitOutcome::Listed(_))
    }
}

/// Resets the loading flag however the submission ends
struct LoadingGuard<'a>(&'a AtomicBool);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// The business listing form: draft state, file selections and submission.
///
/// Editors take `&mut self`; [`submit`](Self::submit) borrows the form
/// immutably for the whole workflow, so it always works on the state the
/// form had when it was invoked.
pub struct ListingForm {
    draft: ListingDraft,
    new_product_name: String,
    logo: Option<SelectedFile>,
    product_images: Vec<SelectedFile>,
    receipt: Option<SelectedFile>,
    loading: AtomicBool,
    collaborators: Collaborators,
    settings: FormSettings,
    on_success: Option<Box<dyn Fn() + Send + Sync>>,
}

impl fmt::Debug for ListingForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListingForm")
            .field("draft", &self.draft)
            .field("logo", &self.logo)
            .field("product_images", &self.product_images)
            .field("receipt", &self.receipt)
            .field("loading", &self.is_loading())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl ListingForm {
    /// An empty form with default settings
    pub fn new(collaborators: Collaborators) -> Self {
        Self::with_settings(collaborators, FormSettings::default())
    }

    pub fn with_settings(collaborators: Collaborators, settings: FormSettings) -> Self {
        Self {
            draft: ListingDraft::new(),
            new_product_name: String::new(),
            logo: None,
            product_images: Vec::new(),
            receipt: None,
            loading: AtomicBool::new(false),
            collaborators,
            settings,
            on_success: None,
        }
    }

    /// Run `callback` after a successful submission instead of opening the dashboard
    pub fn on_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn logo(&self) -> Option<&SelectedFile> {
        self.logo.as_ref()
    }

    pub fn product_images(&self) -> &[SelectedFile] {
        &self.product_images
    }

    pub fn receipt(&self) -> Option<&SelectedFile> {
        self.receipt.as_ref()
    }

    pub fn new_product_name(&self) -> &str {
        &self.new_product_name
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL
        }
    }

    /// The payment choice is only offered when an online shop is wanted
    pub fn shows_payment_options(&self) -> bool {
        self.draft.online_shop == OnlineShopOption::Sure
    }

    pub fn shows_receipt_upload(&self) -> bool {
        self.draft.wants_receipt()
    }

    // Field editors

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.draft.set_text(field, value);
    }

    pub fn set_category(&mut self, category: BusinessCategory) {
        self.draft.category = Some(category);
    }

    pub fn set_option(&mut self, option: BusinessOption, checked: bool) {
        self.draft.set_option(option, checked);
    }

    /// Toggle a predefined product; returns `false` for any other name
    pub fn set_product(&mut self, product: &str, checked: bool) -> bool {
        self.draft.catalog.set_selected(product, checked)
    }

    pub fn set_online_shop(&mut self, option: OnlineShopOption) {
        self.draft.online_shop = option;
    }

    pub fn set_payment(&mut self, option: PaymentOption) {
        self.draft.payment = option;
    }

    pub fn set_new_product_name(&mut self, value: impl Into<String>) {
        self.new_product_name = value.into();
    }

    /// Add the typed product name to the catalog. Empty or repeated names
    /// are ignored silently and the input is kept.
    pub fn add_custom_product(&mut self) -> bool {
        let added = self.draft.catalog.add_custom(&self.new_product_name);
        if added {
            self.new_product_name.clear();
        }
        added
    }

    pub fn remove_custom_product(&mut self, name: &str) {
        self.draft.catalog.remove_custom(name);
    }

    // File selection handlers. A rejected selection shows an error notice
    // and leaves the previous selection in place.

    pub fn select_logo(&mut self, files: Vec<SelectedFile>) -> Result<(), SelectionError> {
        let picked = self.checked(files::validate_single(FileSlot::Logo, files))?;
        if picked.is_some() {
            self.logo = picked;
        }
        Ok(())
    }

    pub fn select_product_images(
        &mut self,
        files: Vec<SelectedFile>,
    ) -> Result<(), SelectionError> {
        self.product_images = self.checked(files::validate_product_images(files))?;
        Ok(())
    }

    pub fn select_receipt(&mut self, files: Vec<SelectedFile>) -> Result<(), SelectionError> {
        let picked = self.checked(files::validate_single(FileSlot::Receipt, files))?;
        if picked.is_some() {
            self.receipt = picked;
        }
        Ok(())
    }

    fn checked<T>(&self, result: Result<T, SelectionError>) -> Result<T, SelectionError> {
        result.map_err(|e| {
            self.collaborators.notifier.notify(e.notice());
            e
        })
    }

    /// Upload the selected files and insert the listing.
    ///
    /// Every outcome other than [`SubmitOutcome::Busy`] shows exactly one notice.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_loading() {
            return SubmitOutcome::Busy;
        }

        if let Err(e) = self.draft.check_required() {
            self.collaborators
                .notifier
                .notify(Notice::error("Missing Information", e.to_string()));
            return SubmitOutcome::Incomplete(e);
        }

        let Some(identity) = self.collaborators.identity.current() else {
            info!("Submission without a signed-in user, redirecting to sign in");
            self.collaborators.notifier.notify(Notice::error(
                "Authentication Required",
                "Please sign in to list your business.",
            ));
            self.collaborators.navigator.navigate(Route::SignIn);
            return SubmitOutcome::SignInRequired;
        };

        if self.loading.swap(true, Ordering::SeqCst) {
            return SubmitOutcome::Busy;
        }
        let _loading = LoadingGuard(&self.loading);

        match self.upload_and_insert(&identity).await {
            Ok(row) => {
                info!("Listed business {:?} for {}", row.name, identity.id);
                self.collaborators.notifier.notify(Notice::info(
                    "Success!",
                    "Your business has been listed successfully.",
                ));
                match &self.on_success {
                    Some(callback) => callback(),
                    None => self.collaborators.navigator.navigate(Route::Dashboard),
                }
                SubmitOutcome::Listed(row)
            }
            Err(e) => {
                error!("Error listing business: {:?}", e);
                self.collaborators
                    .notifier
                    .notify(Notice::error("Error", e.user_message()));
                SubmitOutcome::Failed(e)
            }
        }
    }

    async fn upload_and_insert(&self, identity: &Identity) -> Result<BusinessRow, SubmitError> {
        let storage = self.collaborators.storage.as_ref();
        let bucket = self.settings.bucket.as_str();
        let options = &self.settings.upload;
        let mut assets = UploadedAssets::default();

        if let Some(logo) = &self.logo {
            let path = AssetKind::Logo.path(&identity.id, now_millis(), None, &logo.name);
            assets.logo_url =
                Some(upload::upload_file(storage, bucket, &path, logo, options).await?);
        }

        if !self.product_images.is_empty() {
            let report = upload::upload_batch(
                storage,
                bucket,
                AssetKind::ProductImage,
                &identity.id,
                now_millis(),
                &self.product_images,
                options,
            )
            .await;
            if report.failed() > 0 {
                return Err(SubmitError::ProductImages { report });
            }
            assets.product_image_urls = report.into_urls()?;
        }

        if self.draft.wants_receipt() {
            if let Some(receipt) = &self.receipt {
                let path = AssetKind::Receipt.path(&identity.id, now_millis(), None, &receipt.name);
                assets.receipt_url =
                    Some(upload::upload_file(storage, bucket, &path, receipt, options).await?);
            }
        }

        let row = self.draft.to_row(&identity.id, assets)?;
        debug!("Inserting listing row into {}", self.settings.table);
        self.collaborators
            .store
            .insert(&self.settings.table, &row)
            .await
            .map_err(SubmitError::Insert)?;

        Ok(row)
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
