pub mod console;
pub mod files;
pub mod form;
pub mod traits;
pub mod types;
pub mod upload;

pub use console::{FixedIdentity, LogNavigator, LogNotifier};
pub use files::{FileSlot, SelectionError, MAX_FILE_SIZE, MAX_PRODUCT_IMAGES};
pub use form::{Collaborators, FormSettings, ListingForm, SubmitError, SubmitOutcome};
pub use traits::{IdentityProvider, ListingStore, Navigator, Notifier, ObjectStorage};
pub use types::{AssetKind, Notice, NoticeVariant, Route, UploadOptions};
pub use upload::{BatchReport, UploadFailure};
