//! Application settings loaded via OrthoConfig.
//!
//! Values merge from CLI flags, `USER_ADMIN_*` environment variables, and
//! configuration files. Every field is optional; accessors apply defaults and
//! validate what was supplied.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REDIRECT_AFTER_SAVE: &str = "/";

/// Errors raised when a supplied setting is unusable.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `backend_url` does not parse.
    #[error("backend_url {value:?} is not a valid URL: {source}")]
    BackendUrl {
        /// Supplied value.
        value: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// `backend_url` is not HTTP(S).
    #[error("backend_url {value:?} must use http or https")]
    BackendScheme {
        /// Supplied value.
        value: String,
    },
    /// `bind_addr` is not `host:port`.
    #[error("bind_addr {value:?} is not a socket address: {source}")]
    BindAddr {
        /// Supplied value.
        value: String,
        /// Parser failure.
        source: std::net::AddrParseError,
    },
    /// `request_timeout_secs` is zero.
    #[error("request_timeout_secs must be greater than zero")]
    ZeroTimeout,
    /// `redirect_after_save` could leave the application.
    #[error("redirect_after_save {value:?} must be a local path starting with '/'")]
    Redirect {
        /// Supplied value.
        value: String,
    },
}

/// Settings for the user admin web application.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_ADMIN")]
pub struct WebAppSettings {
    /// Base URL of the REST users backend.
    pub backend_url: Option<String>,
    /// Socket address the page server listens on.
    pub bind_addr: Option<String>,
    /// Per-request timeout for backend calls, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Page visited once a save notification is dismissed.
    pub redirect_after_save: Option<String>,
}

impl WebAppSettings {
    /// Parsed backend base URL, falling back to the local default.
    ///
    /// # Errors
    /// Returns [`SettingsError`] for unparsable or non-HTTP URLs.
    pub fn backend_url(&self) -> Result<Url, SettingsError> {
        let raw = self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL);
        let url = Url::parse(raw).map_err(|source| SettingsError::BackendUrl {
            value: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::BackendScheme {
                value: raw.to_owned(),
            }),
        }
    }

    /// Parsed listen address.
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the value is not `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Backend request timeout.
    ///
    /// # Errors
    /// Returns [`SettingsError::ZeroTimeout`] for a zero timeout.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS) {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }

    /// Local path visited after a successful save.
    ///
    /// # Errors
    /// Returns [`SettingsError::Redirect`] unless the value is a local
    /// absolute path. A second character of `/` or `\` is rejected.
    pub fn redirect_after_save(&self) -> Result<&str, SettingsError> {
        let raw = self
            .redirect_after_save
            .as_deref()
            .unwrap_or(DEFAULT_REDIRECT_AFTER_SAVE);
        // Browsers read `//host` and `/\host` as protocol-relative URLs.
        let leaves_origin = matches!(raw.as_bytes().get(1), Some(b'/' | b'\\'));
        if raw.starts_with('/') && !leaves_origin {
            Ok(raw)
        } else {
            Err(SettingsError::Redirect {
                value: raw.to_owned(),
            })
        }
    }
}
