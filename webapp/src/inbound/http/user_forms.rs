//! Add, edit and view pages built on the user form component.
//!
//! ```text
//! GET  /user/add
//! POST /user/add        name=Ann&email=ann@x.io
//! GET  /user/edit/{id}
//! POST /user/edit/{id}  id="2"&name=Ann&email=ann@x.io
//! GET  /user/view/{id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::components::{Button, ButtonStyle};
use super::render::{FORM_TEMPLATE, page as render_page};
use super::state::HttpState;
use super::users::{fetch_user, parse_user_id};
use super::views::{PageView, user_url};
use crate::domain::user_form::{FormMode, FormValues, SubmitOutcome, UserForm};
use crate::domain::validation::FormErrors;
use crate::domain::{Error, ErrorCode, PageResult, User, UserId};

const ADD_ACTION: &str = "/user/add";

/// Body posted by the add and edit forms. Missing fields count as empty.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserFormInput {
    /// Edited record's id as JSON text (see [`UserId::to_form_value`]).
    /// Only the edit form sends it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Submitted name.
    #[serde(default)]
    pub name: String,
    /// Submitted email.
    #[serde(default)]
    pub email: String,
}

impl From<UserFormInput> for FormValues {
    fn from(input: UserFormInput) -> Self {
        Self::new(input.name, input.email)
    }
}

#[derive(Serialize)]
struct FormBody<'a> {
    values: &'a FormValues,
    errors: &'a FormErrors,
    read_only: bool,
    record_id: Option<String>,
    form_action: Option<String>,
    buttons: [Button; 2],
}

fn new_form(state: &HttpState, mode: FormMode) -> UserForm {
    UserForm::new(mode, state.clock.clone(), state.redirect_after_save.clone())
}

fn cancel_button() -> Button {
    Button::link("Cancel", "/", ButtonStyle::Secondary)
}

fn form_response(form: &UserForm, status: StatusCode) -> PageResult<HttpResponse> {
    let mode = form.mode();
    let (form_action, primary) = match mode {
        FormMode::Add => (
            Some(ADD_ACTION.to_owned()),
            Button::submit(mode.title(), ButtonStyle::Primary),
        ),
        FormMode::Edit(user) => (
            Some(user_url("edit", user.id())),
            Button::submit(mode.title(), ButtonStyle::Primary),
        ),
        FormMode::View(user) => (
            None,
            Button::link("Edit", user_url("edit", user.id()), ButtonStyle::Success),
        ),
    };
    let body = FormBody {
        values: form.values(),
        errors: form.errors(),
        read_only: mode.is_read_only(),
        record_id: match mode {
            FormMode::Edit(user) => Some(user.id().to_form_value()),
            FormMode::Add | FormMode::View(_) => None,
        },
        form_action,
        buttons: [primary, cancel_button()],
    };
    let view = PageView::new(mode.title(), mode.description(), body)
        .with_notifications(form.notifications());
    render_page(status, FORM_TEMPLATE, &view)
}

/// Id of the record an edit form was rendered for.
///
/// The hidden field keeps the stored id's JSON type; it must spell the same
/// key as the path.
fn submitted_record_id(segment: &str, submitted: Option<&str>) -> PageResult<UserId> {
    let key = parse_user_id(segment)?;
    let Some(raw) = submitted else {
        return Err(Error::invalid_request("edit form is missing the record id"));
    };
    match UserId::from_form_value(raw) {
        Some(id) if id.same_key(&key) => Ok(id),
        _ => Err(Error::invalid_request(format!("record id does not match user {key}"))),
    }
}

async fn submit_form(
    mut form: UserForm,
    input: UserFormInput,
    state: &HttpState,
) -> PageResult<HttpResponse> {
    match form.submit(input.into(), state.users.as_ref()).await {
        Ok(SubmitOutcome::Invalid) => form_response(&form, StatusCode::UNPROCESSABLE_ENTITY),
        Ok(SubmitOutcome::Saved) => {
            info!(form = form.mode().title(), "user saved");
            form_response(&form, StatusCode::OK)
        }
        Err(err) if err.code() == ErrorCode::ServiceUnavailable => {
            error!(form = form.mode().title(), error = %err, "user submission failed");
            form_response(&form, StatusCode::BAD_GATEWAY)
        }
        Err(err) => Err(err),
    }
}

/// Blank add form.
#[get("/user/add")]
pub async fn add_user_page(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    form_response(&new_form(&state, FormMode::Add), StatusCode::OK)
}

/// Validate and create a user.
#[post("/user/add")]
pub async fn add_user(
    state: web::Data<HttpState>,
    input: web::Form<UserFormInput>,
) -> PageResult<HttpResponse> {
    let form = new_form(&state, FormMode::Add);
    submit_form(form, input.into_inner(), &state).await
}

/// Edit form prefilled from the stored record.
#[get("/user/edit/{id}")]
pub async fn edit_user_page(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = fetch_user(&state, &id).await?;
    form_response(&new_form(&state, FormMode::Edit(user)), StatusCode::OK)
}

/// Validate and update a user. The stored id is echoed back with its
/// original JSON type.
#[post("/user/edit/{id}")]
pub async fn edit_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    input: web::Form<UserFormInput>,
) -> PageResult<HttpResponse> {
    let input = input.into_inner();
    let id = submitted_record_id(&path, input.id.as_deref())?;
    let record = User::new(id, input.name.as_str(), input.email.as_str());
    let form = new_form(&state, FormMode::Edit(record));
    submit_form(form, input, &state).await
}

/// Read-only user details.
#[get("/user/view/{id}")]
pub async fn view_user_page(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = fetch_user(&state, &id).await?;
    form_response(&new_form(&state, FormMode::View(user)), StatusCode::OK)
}

#[cfg(test)]
#[path = "user_forms_tests.rs"]
mod tests;
