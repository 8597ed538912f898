use crate::models::options::{BusinessCategory, BusinessOption, PaymentOption};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Public URLs produced by the upload steps of a submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedAssets {
    pub logo_url: Option<String>,
    pub product_image_urls: Vec<String>,
    pub receipt_url: Option<String>,
}

/// One row of the `businesses` table.
///
/// Besides the listing fields, the row carries the payment columns
/// `online_shop`, `payment_option` and `payment_receipt_url`; the table
/// needs those three columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessRow {
    pub owner_id: String,
    pub name: String,
    pub description: String,
    pub category: BusinessCategory,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub website: String,
    pub image_url: Option<String>,
    pub facebook_page: Option<String>,
    pub tiktok_url: Option<String>,
    pub starting_price: Option<String>,
    pub business_options: Option<Vec<BusinessOption>>,
    /// Catalog entries joined with ", "
    pub products_catalog: Option<String>,
    pub license_expired_date: Option<NaiveDate>,
    pub product_images: Option<Vec<String>>,
    pub online_shop: bool,
    pub payment_option: Option<PaymentOption>,
    pub payment_receipt_url: Option<String>,
}
