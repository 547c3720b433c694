//! Page template registry and HTML response helpers.
//!
//! Templates are compiled into the binary and registered once. Names end in
//! `.html`, which turns on minijinja's HTML auto-escaping for every value.

use std::sync::OnceLock;

use actix_web::http::StatusCode;
use actix_web::http::header::{CACHE_CONTROL, ContentType};
use actix_web::HttpResponse;
use minijinja::Environment;
use serde::Serialize;
use tracing::error;

use crate::domain::Error;

pub(crate) const LIST_TEMPLATE: &str = "list.html";
pub(crate) const FORM_TEMPLATE: &str = "form.html";
pub(crate) const CONFIRM_DELETE_TEMPLATE: &str = "confirm_delete.html";
pub(crate) const ERROR_TEMPLATE: &str = "error.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("banner.html", include_str!("templates/banner.html")),
    ("button.html", include_str!("templates/button.html")),
    (LIST_TEMPLATE, include_str!("templates/list.html")),
    (FORM_TEMPLATE, include_str!("templates/form.html")),
    (
        CONFIRM_DELETE_TEMPLATE,
        include_str!("templates/confirm_delete.html"),
    ),
    (ERROR_TEMPLATE, include_str!("templates/error.html")),
];

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            if let Err(error) = env.add_template(name, source) {
                error!(template = name, %error, "failed to compile page template");
            }
        }
        env
    })
}

/// Render template `name` with `context`.
pub(crate) fn render<S: Serialize>(name: &str, context: &S) -> Result<String, Error> {
    environment()
        .get_template(name)
        .and_then(|template| template.render(context))
        .map_err(|error| {
            error!(template = name, %error, "page rendering failed");
            Error::internal(format!("failed to render {name}: {error}"))
        })
}

/// Uncached HTML response.
pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header((CACHE_CONTROL, "no-store"))
        .content_type(ContentType::html())
        .body(body)
}

/// Render `name` and wrap it in an HTML response.
pub(crate) fn page<S: Serialize>(
    status: StatusCode,
    name: &str,
    context: &S,
) -> Result<HttpResponse, Error> {
    render(name, context).map(|body| html(status, body))
}
