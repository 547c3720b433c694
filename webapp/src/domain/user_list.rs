//! User list page state: collection, search term, notification, delete flow.

use super::notification::{Notification, NotificationDisplay, OnDismiss, SharedClock};
use super::ports::UserDirectory;
use super::search::filter_users;
use super::{Error, User, UserId};

/// Whether the user confirmed a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user agreed to proceed.
    Confirmed,
    /// The user backed out.
    Declined,
}

/// Result of a delete request that did not fail at the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The record was removed from the backend and from the page.
    Deleted(User),
    /// Nothing happened because the user declined.
    Cancelled,
}

/// State backing the list page for one request.
#[derive(Debug)]
pub struct UserListPage {
    users: Vec<User>,
    search_term: String,
    notifications: NotificationDisplay,
}

impl UserListPage {
    /// Load the full collection from the backend.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::ServiceUnavailable`] when the
    /// backend is unreachable or answers with a failure status.
    pub async fn load(directory: &dyn UserDirectory, clock: SharedClock) -> Result<Self, Error> {
        let users = directory.list_users().await?;
        Ok(Self::with_users(users, clock))
    }

    /// Page over an already loaded collection.
    #[must_use]
    pub fn with_users(users: Vec<User>, clock: SharedClock) -> Self {
        Self {
            users,
            search_term: String::new(),
            notifications: NotificationDisplay::new(clock),
        }
    }

    /// Replace the search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        self.search_term.as_str()
    }

    /// Every loaded user, unfiltered.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Rows to display: the collection filtered by the current term.
    pub fn visible_rows(&self) -> impl Iterator<Item = &User> {
        filter_users(&self.users, &self.search_term)
    }

    /// Notification slot.
    #[must_use]
    pub fn notifications(&self) -> &NotificationDisplay {
        &self.notifications
    }

    /// Mutable notification slot.
    pub fn notifications_mut(&mut self) -> &mut NotificationDisplay {
        &mut self.notifications
    }

    /// Delete the listed user whose id spells `key` after confirmation and
    /// drop it from the page.
    ///
    /// The backend is sent the listed record's own id, so its JSON type is
    /// preserved whatever type `key` has. `dismiss_to` is the page reloaded
    /// when the resulting notification is dismissed.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::NotFound`] when the id is not on
    /// the page, and the mapped backend error when the call fails. Failures
    /// also leave an error notification on the page.
    pub async fn delete(
        &mut self,
        key: &UserId,
        confirmation: Confirmation,
        directory: &dyn UserDirectory,
        dismiss_to: &str,
    ) -> Result<DeleteOutcome, Error> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }
        let Some((position, id)) = self
            .users
            .iter()
            .enumerate()
            .find(|(_, user)| user.id().same_key(key))
            .map(|(position, user)| (position, user.id().clone()))
        else {
            let error = Error::not_found(format!("user {key} is not listed"));
            self.notify(Notification::error(error.message()), dismiss_to);
            return Err(error);
        };

        self.notify(Notification::info("Deleting user..."), dismiss_to);
        match directory.delete_user(&id).await {
            Ok(()) => {
                let removed = self.users.remove(position);
                self.notify(
                    Notification::success(format!("User {} deleted successfully!", removed.name())),
                    dismiss_to,
                );
                Ok(DeleteOutcome::Deleted(removed))
            }
            Err(error) => {
                self.notify(
                    Notification::error(format!("Delete data failed: {error}")),
                    dismiss_to,
                );
                Err(error.into())
            }
        }
    }

    fn notify(&mut self, notification: Notification, dismiss_to: &str) {
        self.notifications
            .show(notification, OnDismiss::Navigate(dismiss_to.to_owned()));
    }
}
