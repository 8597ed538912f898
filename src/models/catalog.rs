use crate::models::options::PREDEFINED_PRODUCTS;
use serde::{Deserialize, Serialize};

/// Ordered set of product/service names offered by a business.
///
/// Entries come from the predefined checkboxes or from free-form custom
/// names. Both end up in one flat list; `custom` only remembers which
/// entries were typed in so they can be shown with a remove button.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalog {
    entries: Vec<String>,
    custom: Vec<String>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkbox toggle: add when checked and absent, remove when unchecked.
    /// Only predefined products have a checkbox; other names are ignored
    /// and `false` is returned.
    pub fn set_selected(&mut self, product: &str, checked: bool) -> bool {
        if !PREDEFINED_PRODUCTS.contains(&product) {
            return false;
        }
        if checked {
            if !self.contains(product) {
                self.entries.push(product.to_string());
            }
        } else {
            self.entries.retain(|p| p != product);
        }
        true
    }

    /// Add a typed-in product. Returns `false` (and changes nothing) when the
    /// trimmed name is empty or already a custom entry.
    pub fn add_custom(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() || self.custom.iter().any(|p| p == name) {
            return false;
        }

        self.custom.push(name.to_string());
        if !self.contains(name) {
            self.entries.push(name.to_string());
        }
        true
    }

    /// Remove a custom product from both lists. Removing twice is a no-op.
    pub fn remove_custom(&mut self, name: &str) {
        self.custom.retain(|p| p != name);
        self.entries.retain(|p| p != name);
    }

    pub fn contains(&self, product: &str) -> bool {
        self.entries.iter().any(|p| p == product)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The persisted form: all entries joined with ", ", or `None` when empty
    pub fn joined(&self) -> Option<String> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_never_duplicates() {
        let mut catalog = ProductCatalog::new();
        catalog.set_selected("Tea", true);
        catalog.set_selected("Tea", true);
        catalog.set_selected("Cold Brew", true);
        assert_eq!(catalog.entries(), ["Tea", "Cold Brew"]);

        catalog.set_selected("Tea", false);
        catalog.set_selected("Tea", false);
        assert_eq!(catalog.entries(), ["Cold Brew"]);
    }

    #[test]
    fn toggle_ignores_names_without_a_checkbox() {
        let mut catalog = ProductCatalog::new();
        assert!(!catalog.set_selected("Not A Predefined Thing", true));
        assert!(catalog.is_empty());

        catalog.add_custom("Muffins");
        assert!(!catalog.set_selected("Muffins", false));
        assert_eq!(catalog.entries(), ["Muffins"]);
        assert_eq!(catalog.custom(), ["Muffins"]);
    }

    #[test]
    fn custom_products_are_trimmed_and_unique() {
        let mut catalog = ProductCatalog::new();
        assert!(catalog.add_custom("  Bagels "));
        assert!(!catalog.add_custom("Bagels"));
        assert!(!catalog.add_custom("   "));
        assert!(catalog.add_custom("bagels"));

        assert_eq!(catalog.custom(), ["Bagels", "bagels"]);
        assert_eq!(catalog.entries(), ["Bagels", "bagels"]);
    }

    #[test]
    fn custom_matching_a_checked_product_is_listed_once() {
        let mut catalog = ProductCatalog::new();
        catalog.set_selected("Tea", true);
        assert!(catalog.add_custom("Tea"));
        assert_eq!(catalog.entries(), ["Tea"]);
        assert_eq!(catalog.custom(), ["Tea"]);
    }

    #[test]
    fn remove_custom_is_idempotent() {
        let mut catalog = ProductCatalog::new();
        catalog.set_selected("Pastries", true);
        catalog.add_custom("Smoothies");

        catalog.remove_custom("Smoothies");
        let after_first = catalog.clone();
        catalog.remove_custom("Smoothies");

        assert_eq!(catalog, after_first);
        assert_eq!(catalog.entries(), ["Pastries"]);
        assert!(catalog.custom().is_empty());
    }

    #[test]
    fn joined_is_none_when_empty() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.joined(), None);
        catalog.set_selected("Tea", true);
        catalog.add_custom("Muffins");
        assert_eq!(catalog.joined().as_deref(), Some("Tea, Muffins"));
    }
}
