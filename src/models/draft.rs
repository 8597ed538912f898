use crate::models::catalog::ProductCatalog;
use crate::models::options::{BusinessCategory, BusinessOption, OnlineShopOption, PaymentOption};
use crate::models::row::{BusinessRow, UploadedAssets};
use chrono::NaiveDate;
use thiserror::Error;

/// Free-text inputs of the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
    Phone,
    LicenseExpiredDate,
    Address,
    City,
    State,
    ZipCode,
    Website,
    FacebookPage,
    TiktokUrl,
    StartingPrice,
}

impl TextField {
    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Business name",
            TextField::Description => "Business description",
            TextField::Phone => "Phone number",
            TextField::LicenseExpiredDate => "License expiry date",
            TextField::Address => "Address",
            TextField::City => "City",
            TextField::State => "State",
            TextField::ZipCode => "ZIP code",
            TextField::Website => "Website",
            TextField::FacebookPage => "Facebook page",
            TextField::TiktokUrl => "TikTok URL",
            TextField::StartingPrice => "Starting price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("License expiry date must be a YYYY-MM-DD date, got {0:?}.")]
    InvalidDate(String),
}

/// In-progress state of the listing form. Never persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub category: Option<BusinessCategory>,
    pub phone: String,
    pub license_expired_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub website: String,
    pub facebook_page: String,
    pub tiktok_url: String,
    pub starting_price: String,
    pub options: Vec<BusinessOption>,
    pub catalog: ProductCatalog,
    pub online_shop: OnlineShopOption,
    pub payment: PaymentOption,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            TextField::Name => &mut self.name,
            TextField::Description => &mut self.description,
            TextField::Phone => &mut self.phone,
            TextField::LicenseExpiredDate => &mut self.license_expired_date,
            TextField::Address => &mut self.address,
            TextField::City => &mut self.city,
            TextField::State => &mut self.state,
            TextField::ZipCode => &mut self.zip_code,
            TextField::Website => &mut self.website,
            TextField::FacebookPage => &mut self.facebook_page,
            TextField::TiktokUrl => &mut self.tiktok_url,
            TextField::StartingPrice => &mut self.starting_price,
        };
        *slot = value;
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Description => &self.description,
            TextField::Phone => &self.phone,
            TextField::LicenseExpiredDate => &self.license_expired_date,
            TextField::Address => &self.address,
            TextField::City => &self.city,
            TextField::State => &self.state,
            TextField::ZipCode => &self.zip_code,
            TextField::Website => &self.website,
            TextField::FacebookPage => &self.facebook_page,
            TextField::TiktokUrl => &self.tiktok_url,
            TextField::StartingPrice => &self.starting_price,
        }
    }

    /// Checkbox toggle for the fixed business options
    pub fn set_option(&mut self, option: BusinessOption, checked: bool) {
        if checked {
            if !self.options.contains(&option) {
                self.options.push(option);
            }
        } else {
            self.options.retain(|o| *o != option);
        }
    }

    /// The payment option that applies, or `None` when no online shop is wanted
    pub fn effective_payment(&self) -> Option<PaymentOption> {
        match self.online_shop {
            OnlineShopOption::Sure => Some(self.payment),
            OnlineShopOption::No => None,
        }
    }

    /// Whether a bank receipt belongs to this submission
    pub fn wants_receipt(&self) -> bool {
        self.effective_payment() == Some(PaymentOption::Bank)
    }

    pub fn check_required(&self) -> Result<(), DraftError> {
        for field in [TextField::Name, TextField::Description] {
            if self.text(field).trim().is_empty() {
                return Err(DraftError::MissingField(field.label()));
            }
        }
        if self.category.is_none() {
            return Err(DraftError::MissingField("Category"));
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::MissingField(TextField::Phone.label()));
        }
        self.license_date().map(|_| ())
    }

    pub fn license_date(&self) -> Result<Option<NaiveDate>, DraftError> {
        let raw = self.license_expired_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| DraftError::InvalidDate(raw.to_string()))
    }

    /// Build the row to insert, null-coalescing empty optional values
    pub fn to_row(&self, owner_id: &str, assets: UploadedAssets) -> Result<BusinessRow, DraftError> {
        self.check_required()?;
        let category = self.category.ok_or(DraftError::MissingField("Category"))?;
        let payment = self.effective_payment();

        Ok(BusinessRow {
            owner_id: owner_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            category,
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            website: self.website.clone(),
            image_url: assets.logo_url.filter(|u| !u.is_empty()),
            facebook_page: non_empty(&self.facebook_page),
            tiktok_url: non_empty(&self.tiktok_url),
            starting_price: non_empty(&self.starting_price),
            business_options: if self.options.is_empty() {
                None
            } else {
                Some(self.options.clone())
            },
            products_catalog: self.catalog.joined(),
            license_expired_date: self.license_date()?,
            product_images: if assets.product_image_urls.is_empty() {
                None
            } else {
                Some(assets.product_image_urls)
            },
            online_shop: self.online_shop == OnlineShopOption::Sure,
            payment_option: payment,
            payment_receipt_url: if payment == Some(PaymentOption::Bank) {
                assets.receipt_url
            } else {
                None
            },
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
