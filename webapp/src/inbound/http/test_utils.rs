//! Shared helpers for HTTP handler tests.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::test;

use super::state::HttpState;
use crate::domain::ports::MockUserDirectory;
use crate::test_support::MutableClock;

/// Handler state backed by `directory` and a frozen clock.
pub(crate) fn test_state(directory: MockUserDirectory) -> HttpState {
    HttpState::new(Arc::new(directory), Arc::new(MutableClock::fixed()))
}

/// Response body with HTML entities decoded, for substring assertions.
pub(crate) async fn page_text(response: ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    let raw = std::str::from_utf8(&bytes).expect("utf8 body");
    raw.replace("&#x2f;", "/")
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
