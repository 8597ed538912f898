pub mod catalog;
pub mod draft;
pub mod file;
pub mod options;
pub mod row;

pub use catalog::ProductCatalog;
pub use draft::{DraftError, ListingDraft, TextField};
pub use file::SelectedFile;
pub use options::{
    BusinessCategory, BusinessOption, OnlineShopOption, PaymentOption, UnknownValue,
    PREDEFINED_PRODUCTS,
};
pub use row::{BusinessRow, UploadedAssets};

use serde::{Deserialize, Serialize};

/// The signed-in account submitting a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
