// tests/form_editing.rs

mod common;

use anyhow::Result;
use async_trait::async_trait;
use business_listing::intake::{
    Collaborators, FixedIdentity, ListingForm, ObjectStorage, SelectionError, SubmitOutcome,
    UploadOptions,
};
use business_listing::models::{SelectedFile, PREDEFINED_PRODUCTS};
use common::{fill_required, image, pdf, Harness};
use std::sync::Arc;
use tokio::sync::Notify;

#[test]
fn oversized_logo_is_rejected_and_previous_kept() {
    let h = Harness::signed_in("user-1");
    let mut form = h.form();

    let err = form
        .select_logo(vec![image("huge.png", 1_048_577)])
        .unwrap_err();
    assert!(matches!(err, SelectionError::TooLarge { .. }));
    assert!(form.logo().is_none());

    form.select_logo(vec![image("ok.png", 1_048_576)]).unwrap();
    form.select_logo(vec![image("huge.png", 5_000_000)]).unwrap_err();
    assert_eq!(form.logo().map(|f| f.name.as_str()), Some("ok.png"));

    let notices = h.notifier.notices();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| n.title == "File Too Large" && n.is_error()));
    assert!(notices[0].description.starts_with("Logo file must be smaller than 1MB"));
}

#[test]
fn oversized_receipt_leaves_receipt_unset() {
    let h = Harness::signed_in("user-1");
    let mut form = h.form();
    form.select_receipt(vec![pdf("scan.pdf", 2 * 1024 * 1024)])
        .unwrap_err();
    assert!(form.receipt().is_none());
}

#[test]
fn product_image_selection_is_all_or_nothing() {
    let h = Harness::signed_in("user-1");
    let mut form = h.form();

    form.select_product_images(vec![image("a.png", 1), image("b.png", 2)])
        .unwrap();

    let too_many: Vec<SelectedFile> = (0..4).map(|i| image(&format!("{i}.png"), 1)).collect();
    let err = form.select_product_images(too_many).unwrap_err();
    assert!(matches!(err, SelectionError::TooMany { selected: 4, max: 3 }));

    let err = form
        .select_product_images(vec![image("c.png", 1), image("big.png", 1_048_577)])
        .unwrap_err();
    assert_eq!(err, SelectionError::SomeTooLarge { count: 1 });

    let names: Vec<&str> = form.product_images().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.png", "b.png"]);

    let titles: Vec<String> = h.notifier.notices().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, ["Too Many Files", "Files Too Large"]);
}

#[test]
fn custom_products_flow_through_the_input() {
    let h = Harness::signed_in("user-1");
    let mut form = h.form();

    form.set_new_product_name("  Bagels  ");
    assert!(form.add_custom_product());
    assert_eq!(form.new_product_name(), "");

    form.set_new_product_name("Bagels");
    assert!(!form.add_custom_product());
    assert_eq!(form.new_product_name(), "Bagels");

    assert!(form.set_product(PREDEFINED_PRODUCTS[0], true));
    assert!(!form.set_product("Not On The Menu", true));
    assert_eq!(form.draft().catalog.entries(), ["Bagels", "Espresso Latte"]);
    assert_eq!(form.draft().catalog.custom(), ["Bagels"]);

    form.remove_custom_product("Bagels");
    form.remove_custom_product("Bagels");
    assert_eq!(form.draft().catalog.entries(), ["Espresso Latte"]);
    assert!(form.draft().catalog.custom().is_empty());
    assert!(h.notifier.notices().is_empty());
}

/// Storage whose uploads wait until the test releases them
struct GatedStorage {
    gate: Notify,
}

#[async_trait]
impl ObjectStorage for GatedStorage {
    async fn upload(
        &self,
        _bucket: &str,
        path: &str,
        _file: &SelectedFile,
        _options: &UploadOptions,
    ) -> Result<String> {
        self.gate.notified().await;
        Ok(path.to_string())
    }

    fn public_url(&self, bucket: &str, stored_path: &str) -> String {
        format!("https://cdn.test/{}/{}", bucket, stored_path)
    }
}

#[tokio::test]
async fn second_submit_while_loading_is_ignored() {
    let h = Harness::signed_in("user-1");
    let storage = Arc::new(GatedStorage {
        gate: Notify::new(),
    });
    let collaborators = Collaborators {
        storage: storage.clone(),
        identity: Arc::new(FixedIdentity::signed_in("user-1")),
        ..h.collaborators()
    };
    let mut form = ListingForm::new(collaborators);
    fill_required(&mut form);
    form.select_logo(vec![image("logo.png", 1)]).unwrap();
    assert_eq!(form.submit_label(), "List My Business");

    let (first, second) = tokio::join!(form.submit(), async {
        while !form.is_loading() {
            tokio::task::yield_now().await;
        }
        assert_eq!(form.submit_label(), "Creating Listing...");
        let outcome = form.submit().await;
        storage.gate.notify_one();
        outcome
    });

    assert!(first.is_listed());
    assert!(matches!(second, SubmitOutcome::Busy));
    assert_eq!(h.store.attempts(), 1);
    assert_eq!(h.notifier.notices().len(), 1);
    assert!(!form.is_loading());
}
