//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting handlers
//! return it directly and have it rendered as an HTML error page with a
//! consistent status code.

use actix_web::http::StatusCode;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use super::render::{ERROR_TEMPLATE, html, render};
use super::views::PageView;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn public_message(error: &Error) -> &str {
    match error.code() {
        ErrorCode::InternalError => "Internal server error",
        ErrorCode::ServiceUnavailable => "The user service is unavailable. Please try again later.",
        _ => error.message(),
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    trace_id: Option<&'a str>,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let title = status.canonical_reason().unwrap_or("Error");
        let view = PageView::new(
            title,
            title,
            ErrorBody {
                message: public_message(self),
                trace_id: self.trace_id(),
            },
        );
        let mut response = match render(ERROR_TEMPLATE, &view) {
            Ok(body) => html(status, body),
            Err(_) => HttpResponse::build(status).body(title),
        };
        if let Some(value) = self
            .trace_id()
            .and_then(|id| HeaderValue::from_str(id).ok())
        {
            response
                .headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        response
    }
}
