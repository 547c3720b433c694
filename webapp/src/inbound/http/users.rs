//! List and delete pages.
//!
//! ```text
//! GET  /?q=bob
//! GET  /user/delete/{id}?q=bob
//! POST /user/delete/{id}  confirm=yes&q=bob
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::components::{Button, ButtonStyle};
use super::render::{CONFIRM_DELETE_TEMPLATE, LIST_TEMPLATE, page as render_page};
use super::state::HttpState;
use super::views::{PageView, delete_url, list_url, user_url};
use crate::domain::user_list::{Confirmation, DeleteOutcome, UserListPage};
use crate::domain::{Error, ErrorCode, PageResult, User, UserId};

/// Query string accepted by the list and delete confirmation pages.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListQuery {
    /// Search term; blank shows every user.
    #[serde(default)]
    pub q: String,
}

/// Body posted by the delete confirmation page.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeleteForm {
    /// `yes` when the user confirmed.
    #[serde(default)]
    pub confirm: Option<String>,
    /// Search term of the list the delete started from.
    #[serde(default)]
    pub q: String,
}

impl DeleteForm {
    fn confirmation(&self) -> Confirmation {
        if self.confirm.as_deref() == Some("yes") {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}

#[derive(Serialize)]
struct RowView<'a> {
    id: String,
    name: &'a str,
    email: &'a str,
    buttons: [Button; 3],
}

impl<'a> RowView<'a> {
    fn new(user: &'a User, search_term: &str) -> Self {
        let id = user.id();
        Self {
            id: id.to_string(),
            name: user.name(),
            email: user.email(),
            buttons: [
                Button::link("View", user_url("view", id), ButtonStyle::Info),
                Button::link("Edit", user_url("edit", id), ButtonStyle::Success),
                Button::link("Delete", delete_url(id, search_term), ButtonStyle::Danger),
            ],
        }
    }
}

#[derive(Serialize)]
struct ListBody<'a> {
    search_term: &'a str,
    rows: Vec<RowView<'a>>,
    add_button: Button,
}

#[derive(Serialize)]
struct ConfirmBody<'a> {
    user: &'a User,
    search_term: &'a str,
    form_action: String,
    buttons: [Button; 2],
}

/// Lookup key for a path id; blank ids cannot name a stored user.
pub(super) fn parse_user_id(raw: &str) -> PageResult<UserId> {
    UserId::from_path_segment(raw).ok_or_else(|| Error::not_found("User not found"))
}

/// Fetch one user, mapping absence to a not-found error.
pub(super) async fn fetch_user(state: &HttpState, id: &UserId) -> PageResult<User> {
    match state.users.get_user(id).await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => {
            info!(%id, "requested user does not exist");
            Err(Error::not_found(format!("User {id} not found")))
        }
        Err(err) => {
            error!(%id, error = %err, "failed to load user");
            Err(err.into())
        }
    }
}

async fn load_list(state: &HttpState) -> PageResult<UserListPage> {
    UserListPage::load(state.users.as_ref(), state.clock.clone())
        .await
        .inspect_err(|err| error!(error = %err, "failed to load users"))
}

fn list_response(list: &UserListPage, status: StatusCode) -> PageResult<HttpResponse> {
    let search_term = list.search_term();
    let rows = list
        .visible_rows()
        .map(|user| RowView::new(user, search_term))
        .collect();
    let body = ListBody {
        search_term,
        rows,
        add_button: Button::link("Add User", "/user/add", ButtonStyle::Primary),
    };
    let view = PageView::new("User List", "Manage users", body)
        .with_notifications(list.notifications());
    render_page(status, LIST_TEMPLATE, &view)
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// List every user, filtered by `?q=`.
#[get("/")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListQuery>,
) -> PageResult<HttpResponse> {
    let mut list = load_list(&state).await?;
    list.set_search_term(query.into_inner().q);
    list_response(&list, StatusCode::OK)
}

/// Ask before deleting a user.
#[get("/user/delete/{id}")]
pub async fn confirm_delete(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<ListQuery>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let user = fetch_user(&state, &id).await?;
    let ListQuery { q } = query.into_inner();
    let body = ConfirmBody {
        user: &user,
        search_term: &q,
        form_action: user_url("delete", user.id()),
        buttons: [
            Button::submit("Delete", ButtonStyle::Danger),
            Button::link("Cancel", list_url(&q), ButtonStyle::Secondary),
        ],
    };
    let view = PageView::new("Delete User", "Confirm user deletion", body);
    render_page(StatusCode::OK, CONFIRM_DELETE_TEMPLATE, &view)
}

/// Delete a user once confirmed and show the refreshed list.
#[post("/user/delete/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<DeleteForm>,
) -> PageResult<HttpResponse> {
    let id = parse_user_id(&path)?;
    let form = form.into_inner();
    let confirmation = form.confirmation();
    let dismiss_to = list_url(&form.q);

    let mut list = load_list(&state).await?;
    list.set_search_term(form.q);
    match list
        .delete(&id, confirmation, state.users.as_ref(), &dismiss_to)
        .await
    {
        Ok(DeleteOutcome::Deleted(user)) => {
            info!(%id, name = user.name(), "user deleted");
            list_response(&list, StatusCode::OK)
        }
        Ok(DeleteOutcome::Cancelled) => Ok(see_other(&dismiss_to)),
        Err(err) if err.code() == ErrorCode::NotFound => {
            info!(%id, "delete requested for unlisted user");
            list_response(&list, StatusCode::NOT_FOUND)
        }
        Err(err) => {
            error!(%id, error = %err, "failed to delete user");
            list_response(&list, StatusCode::BAD_GATEWAY)
        }
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
