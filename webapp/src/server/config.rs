//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use webapp::domain::ports::UserDirectory;
use webapp::inbound::http::state::DEFAULT_REDIRECT_AFTER_SAVE;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UserDirectory>,
    pub(crate) redirect_after_save: String,
}

impl ServerConfig {
    /// Serve pages on `bind_addr` backed by `users`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            bind_addr,
            users,
            redirect_after_save: DEFAULT_REDIRECT_AFTER_SAVE.to_owned(),
        }
    }

    /// Page visited once a save notification is dismissed.
    #[must_use]
    pub fn with_redirect_after_save(mut self, path: impl Into<String>) -> Self {
        self.redirect_after_save = path.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
