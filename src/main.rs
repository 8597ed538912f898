use anyhow::Context;
use business_listing::intake::{Collaborators, FixedIdentity, ListingForm, LogNavigator, LogNotifier};
use business_listing::request::ListingRequest;
use business_listing::rest::{RestClient, RestStorage, RestStore};
use business_listing::{Config, SubmitOutcome};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let listing_path = std::env::args()
        .nth(1)
        .context("Usage: business-listing <listing.json>")?;

    let config = Config::from_env()?;
    info!("🏪 Business Listing - submitting {}", listing_path);

    let rest = RestClient::new(&config)?;
    let identity = match &config.user_id {
        Some(id) => FixedIdentity::signed_in(id.clone()),
        None => FixedIdentity::anonymous(),
    };
    let navigator = Arc::new(LogNavigator::default());
    let collaborators = Collaborators {
        storage: Arc::new(RestStorage::new(rest.clone())),
        store: Arc::new(RestStore::new(rest)),
        identity: Arc::new(identity),
        notifier: Arc::new(LogNotifier),
        navigator: navigator.clone(),
    };
    let mut form = ListingForm::with_settings(collaborators, config.form_settings());

    let request = ListingRequest::load(&listing_path).await?;
    let base_dir = Path::new(&listing_path)
        .parent()
        .unwrap_or_else(|| Path::new("."));
    request.apply(&mut form, base_dir).await?;

    let outcome = form.submit().await;
    let next_view = navigator
        .last_route()
        .map(|route| route.path())
        .unwrap_or("the form");

    match outcome {
        SubmitOutcome::Listed(row) => {
            info!("✅ Listed {}, continuing to {}", row.name, next_view);
            println!("{}", serde_json::to_string_pretty(&row)?);
            Ok(())
        }
        SubmitOutcome::Failed(e) => Err(anyhow::Error::new(e).context("Listing failed")),
        SubmitOutcome::Incomplete(e) => Err(anyhow::Error::new(e).context("Listing is incomplete")),
        SubmitOutcome::SignInRequired => anyhow::bail!(
            "Sent to {}: set LISTING_USER_ID to submit a listing",
            next_view
        ),
        SubmitOutcome::Busy => anyhow::bail!("A submission is already running"),
    }
}
