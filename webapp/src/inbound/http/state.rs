//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::notification::SharedClock;
use crate::domain::ports::UserDirectory;

/// Path visited after a successful save unless configured otherwise.
pub const DEFAULT_REDIRECT_AFTER_SAVE: &str = "/";

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Users backend port.
    pub users: Arc<dyn UserDirectory>,
    /// Time source for notification deadlines.
    pub clock: SharedClock,
    /// Local path reloaded once a save notification is dismissed.
    pub redirect_after_save: String,
}

impl HttpState {
    /// Construct state that returns to the list page after saving.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use mockable::DefaultClock;
    /// use url::Url;
    /// use webapp::inbound::http::state::HttpState;
    /// use webapp::outbound::users_api::HttpUserDirectory;
    ///
    /// let base = Url::parse("http://localhost:3001").expect("url");
    /// let users = HttpUserDirectory::new(base, Duration::from_secs(10)).expect("client");
    /// let state = HttpState::new(Arc::new(users), Arc::new(DefaultClock));
    /// assert_eq!(state.redirect_after_save, "/");
    /// ```
    pub fn new(users: Arc<dyn UserDirectory>, clock: SharedClock) -> Self {
        Self {
            users,
            clock,
            redirect_after_save: DEFAULT_REDIRECT_AFTER_SAVE.to_owned(),
        }
    }

    /// Override where a success notification navigates on dismissal.
    #[must_use]
    pub fn with_redirect_after_save(mut self, path: impl Into<String>) -> Self {
        self.redirect_after_save = path.into();
        self
    }
}
