//! Wire DTOs for the users backend.
//!
//! Records decode leniently: missing `name` or `email` become empty strings.
//! A record without `id` is how the backend reports absence from
//! `GET /users/{id}`.

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserDraft, UserId};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    #[serde(default)]
    pub(super) id: Option<UserId>,
    #[serde(default)]
    pub(super) name: String,
    #[serde(default)]
    pub(super) email: String,
}

impl UserDto {
    /// `None` when the payload carries no identifier.
    pub(super) fn into_domain(self) -> Option<User> {
        let id = self.id?;
        Some(User::new(id, self.name, self.email))
    }
}

pub(super) fn into_domain_users(records: Vec<UserDto>) -> Result<Vec<User>, String> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_domain()
                .ok_or_else(|| format!("record {index} has no id"))
        })
        .collect()
}

/// `POST /users` body.
#[derive(Debug, Serialize)]
pub(super) struct NewUserBody<'a> {
    pub(super) name: &'a str,
    pub(super) email: &'a str,
}

impl<'a> From<&'a UserDraft> for NewUserBody<'a> {
    fn from(draft: &'a UserDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
        }
    }
}

/// `PUT /users/{id}` body.
#[derive(Debug, Serialize)]
pub(super) struct UpdatedUserBody<'a> {
    pub(super) id: &'a UserId,
    pub(super) name: &'a str,
    pub(super) email: &'a str,
}
