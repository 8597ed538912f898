use crate::intake::traits::{IdentityProvider, Navigator, Notifier};
use crate::intake::types::{Notice, Route};
use crate::models::Identity;
use std::sync::Mutex;
use tracing::{error, info};

/// Notifier that writes notices to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            error!("{}: {}", notice.title, notice.description);
        } else {
            info!("{}: {}", notice.title, notice.description);
        }
    }
}

/// Navigator for a headless session: logs the redirect and remembers it
#[derive(Debug, Default)]
pub struct LogNavigator {
    last: Mutex<Option<Route>>,
}

impl LogNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|guard| *guard)
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, route: Route) {
        info!("Navigating to {}", route.path());
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

/// Identity fixed for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct FixedIdentity(pub Option<Identity>);

impl FixedIdentity {
    pub fn signed_in(id: impl Into<String>) -> Self {
        Self(Some(Identity::new(id)))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl IdentityProvider for FixedIdentity {
    fn current(&self) -> Option<Identity> {
        self.0.clone()
    }
}
