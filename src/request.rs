use crate::intake::ListingForm;
use crate::models::{
    BusinessCategory, BusinessOption, OnlineShopOption, PaymentOption, SelectedFile, TextField,
    PREDEFINED_PRODUCTS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// A listing described as JSON, replayed into a form field by field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingRequest {
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
    /// Catalog entries. Predefined names are checked; any other name is
    /// added as a custom product.
    pub products_catalog: Vec<String>,
    /// Typed-in entries, added through the custom product input
    pub custom_products: Vec<String>,
    pub online_shop_option: OnlineShopOption,
    pub payment_option: PaymentOption,
    pub logo: Option<PathBuf>,
    pub product_images: Vec<PathBuf>,
    pub receipt: Option<PathBuf>,
}

impl ListingRequest {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Invalid listing JSON in {}", path.display()))
    }

    /// Feed the request through the form's editors and file handlers.
    ///
    /// Relative file paths resolve against `base_dir`. A rejected file
    /// selection aborts with the validation message.
    pub async fn apply(&self, form: &mut ListingForm, base_dir: &Path) -> Result<()> {
        let texts = [
            (TextField::Name, &self.name),
            (TextField::Description, &self.description),
            (TextField::Phone, &self.phone),
            (TextField::LicenseExpiredDate, &self.license_expired_date),
            (TextField::Address, &self.address),
            (TextField::City, &self.city),
            (TextField::State, &self.state),
            (TextField::ZipCode, &self.zip_code),
            (TextField::Website, &self.website),
            (TextField::FacebookPage, &self.facebook_page),
            (TextField::TiktokUrl, &self.tiktok_url),
            (TextField::StartingPrice, &self.starting_price),
        ];
        for (field, value) in texts {
            form.set_text(field, value.as_str());
        }

        if let Some(category) = self.category {
            form.set_category(category);
        }
        for option in &self.options {
            form.set_option(*option, true);
        }
        let typed = self
            .products_catalog
            .iter()
            .filter(|p| !PREDEFINED_PRODUCTS.contains(&p.as_str()));
        for product in &self.products_catalog {
            form.set_product(product, true);
        }
        for product in typed.chain(&self.custom_products) {
            form.set_new_product_name(product.as_str());
            form.add_custom_product();
        }
        form.set_new_product_name("");
        form.set_online_shop(self.online_shop_option);
        form.set_payment(self.payment_option);

        if let Some(logo) = &self.logo {
            let file = load_file(base_dir, logo).await?;
            form.select_logo(vec![file])?;
        }
        if !self.product_images.is_empty() {
            let mut files = Vec::with_capacity(self.product_images.len());
            for path in &self.product_images {
                files.push(load_file(base_dir, path).await?);
            }
            form.select_product_images(files)?;
        }
        if let Some(receipt) = &self.receipt {
            let file = load_file(base_dir, receipt).await?;
            form.select_receipt(vec![file])?;
        }

        info!(
            "Loaded listing {:?}: {} product image(s), logo: {}, receipt: {}",
            self.name,
            form.product_images().len(),
            form.logo().is_some(),
            form.receipt().is_some()
        );
        Ok(())
    }
}

async fn load_file(base_dir: &Path, path: &Path) -> Result<SelectedFile> {
    SelectedFile::from_path(base_dir.join(path)).await
}
