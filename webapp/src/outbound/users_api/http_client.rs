//! Reqwest-backed users backend adapter.
//!
//! This adapter owns transport details only: URL construction, JSON bodies,
//! timeout and HTTP error mapping, and decoding into domain users.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use tracing::debug;
use url::Url;

use super::dto::{NewUserBody, UpdatedUserBody, UserDto, into_domain_users};
use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::{User, UserDraft, UserId};

const USERS_COLLECTION: &str = "users";

/// Users backend client performing one HTTP request per port call.
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// `base_url` may carry a path prefix; `/users` is appended to it.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, id: Option<&UserId>) -> Result<Url, UserDirectoryError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                UserDirectoryError::invalid_request(format!(
                    "base url {} cannot carry a path",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty().push(USERS_COLLECTION);
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "calling users backend");
        self.client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Send `request`, returning the status and the fully read body.
    async fn send(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Vec<u8>), UserDirectoryError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok((status, body.to_vec()))
    }

    /// Send a mutation whose response body is ignored on success.
    async fn send_mutation(&self, request: RequestBuilder) -> Result<(), UserDirectoryError> {
        let (status, body) = self.send(request).await?;
        if status.is_success() {
            Ok(())
        } else {
            Err(map_status_error(status, &body))
        }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self) -> Result<Vec<User>, UserDirectoryError> {
        let url = self.endpoint(None)?;
        let (status, body) = self.send(self.request(Method::GET, url)).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_users(&body)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        let url = self.endpoint(Some(id))?;
        let (status, body) = self.send(self.request(Method::GET, url)).await?;
        if status == StatusCode::NOT_FOUND {
            debug!(%id, "users backend reported no such user");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_user(&body)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError> {
        let url = self.endpoint(None)?;
        let request = self
            .request(Method::POST, url)
            .json(&NewUserBody::from(draft));
        self.send_mutation(request).await
    }

    async fn update_user(&self, draft: &UserDraft) -> Result<(), UserDirectoryError> {
        let Some(id) = draft.id() else {
            return Err(UserDirectoryError::invalid_request(
                "update requires a user id",
            ));
        };
        let url = self.endpoint(Some(id))?;
        let request = self.request(Method::PUT, url).json(&UpdatedUserBody {
            id,
            name: draft.name(),
            email: draft.email(),
        });
        self.send_mutation(request).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        let url = self.endpoint(Some(id))?;
        self.send_mutation(self.request(Method::DELETE, url)).await
    }
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserDirectoryError> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body).map_err(|error| {
        UserDirectoryError::decode(format!("invalid users JSON payload: {error}"))
    })?;
    into_domain_users(decoded).map_err(UserDirectoryError::decode)
}

fn parse_user(body: &[u8]) -> Result<Option<User>, UserDirectoryError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let decoded: UserDto = serde_json::from_slice(body).map_err(|error| {
        UserDirectoryError::decode(format!("invalid user JSON payload: {error}"))
    })?;
    Ok(decoded.into_domain())
}

fn map_transport_error(error: reqwest::Error) -> UserDirectoryError {
    if error.is_timeout() {
        UserDirectoryError::timeout(error.to_string())
    } else {
        UserDirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> UserDirectoryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("no reason given")
            .to_owned()
    } else {
        preview
    };

    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            UserDirectoryError::timeout(format!("status {}: {message}", status.as_u16()))
        }
        _ => UserDirectoryError::status(status.as_u16(), message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
