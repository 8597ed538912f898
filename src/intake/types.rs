use serde::{Deserialize, Serialize};

/// Bucket all listing assets are stored in
pub const DEFAULT_BUCKET: &str = "business-assets";

/// Table listings are inserted into
pub const DEFAULT_TABLE: &str = "businesses";

pub const SUBMIT_LABEL: &str = "List My Business";
pub const SUBMIT_LABEL_LOADING: &str = "Creating Listing...";

pub const FALLBACK_ERROR: &str = "Failed to list business. Please try again.";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A transient message shown to the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Views the form can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::SignIn => "/auth/signin",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Options passed with every storage upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    pub cache_control: String,
    pub upsert: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            cache_control: "3600".to_string(),
            upsert: false,
        }
    }
}

/// Top-level folder an uploaded asset lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Logo,
    ProductImage,
    Receipt,
}

impl AssetKind {
    pub fn folder(&self) -> &'static str {
        match self {
            AssetKind::Logo => "logos",
            AssetKind::ProductImage => "products",
            AssetKind::Receipt => "receipts",
        }
    }

    /// `{folder}/{owner}/{millis}_{index_}{file_name}`
    pub fn path(
        &self,
        owner_id: &str,
        timestamp_millis: i64,
        index: Option<usize>,
        file_name: &str,
    ) -> String {
        match index {
            Some(i) => format!(
                "{}/{}/{}_{}_{}",
                self.folder(),
                owner_id,
                timestamp_millis,
                i,
                file_name
            ),
            None => format!(
                "{}/{}/{}_{}",
                self.folder(),
                owner_id,
                timestamp_millis,
                file_name
            ),
        }
    }
}
