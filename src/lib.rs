//! Business listing intake: the draft a listing form collects, the checks
//! applied to its file inputs, and the submission that uploads the files
//! and inserts one `businesses` row.

pub mod config;
pub mod intake;
pub mod models;
pub mod request;
pub mod rest;

pub use config::Config;
pub use intake::{Collaborators, ListingForm, SubmitOutcome};
pub use models::{BusinessRow, ListingDraft};
