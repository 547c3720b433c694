//! View models shared by page templates.

use serde::Serialize;
use url::form_urlencoded;

use crate::domain::UserId;
use crate::domain::notification::{Banner, NotificationDisplay, NotificationKind};

/// Banner as the layout template consumes it.
#[derive(Debug, Serialize)]
pub(crate) struct BannerView {
    kind: NotificationKind,
    message: String,
    remaining_ms: u64,
    refresh_secs: u64,
    navigate_to: Option<String>,
}

impl From<Banner> for BannerView {
    fn from(banner: Banner) -> Self {
        Self {
            kind: banner.kind,
            message: banner.message,
            remaining_ms: banner.remaining_ms,
            refresh_secs: banner.remaining_ms.div_ceil(1000),
            navigate_to: banner.navigate_to,
        }
    }
}

/// Layout fields plus a page-specific body flattened into the same context.
#[derive(Debug, Serialize)]
pub(crate) struct PageView<'a, B> {
    title: &'a str,
    description: &'a str,
    banner: Option<BannerView>,
    #[serde(flatten)]
    body: B,
}

impl<'a, B: Serialize> PageView<'a, B> {
    pub(crate) fn new(title: &'a str, description: &'a str, body: B) -> Self {
        Self {
            title,
            description,
            banner: None,
            body,
        }
    }

    /// Show whatever `display` currently holds.
    pub(crate) fn with_notifications(mut self, display: &NotificationDisplay) -> Self {
        self.banner = display.banner().map(BannerView::from);
        self
    }
}

/// List page URL preserving the search term.
pub(crate) fn list_url(search_term: &str) -> String {
    if search_term.trim().is_empty() {
        return String::from("/");
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", search_term)
        .finish();
    format!("/?{query}")
}

/// `/user/{action}/{id}` with the id percent-encoded as one path segment.
pub(crate) fn user_url(action: &str, id: &UserId) -> String {
    let segment: String = form_urlencoded::byte_serialize(id.to_string().as_bytes()).collect();
    // byte_serialize encodes a literal '+' as %2B, so any '+' left is a space.
    format!("/user/{action}/{}", segment.replace('+', "%20"))
}

/// Delete confirmation URL carrying the list search term.
pub(crate) fn delete_url(id: &UserId, search_term: &str) -> String {
    let base = user_url("delete", id);
    if search_term.trim().is_empty() {
        return base;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", search_term)
        .finish();
    format!("{base}?{query}")
}
