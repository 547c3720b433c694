//! Add / edit / view form component.
//!
//! A submission runs `validating -> submitting -> idle`. Invalid input stops
//! before any backend call and leaves the fresh error list on the form.
//! Backend failures show an error notification *and* return the error so the
//! hosting page can log it.

use serde::Serialize;

use super::notification::{Notification, NotificationDisplay, OnDismiss, SharedClock};
use super::ports::UserDirectory;
use super::validation::{Candidate, FormErrors, validate};
use super::{Error, User, UserDraft};

/// Which flavour of the form is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Blank form creating a new record.
    Add,
    /// Editable form for an existing record.
    Edit(User),
    /// Read-only form for an existing record.
    View(User),
}

impl FormMode {
    /// Heading and submit label for the mode.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add => "Add User",
            Self::Edit(_) => "Edit User",
            Self::View(_) => "User Information",
        }
    }

    /// Page description for the mode.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Add => "Add new user",
            Self::Edit(_) => "Edit user",
            Self::View(_) => "Display user detail",
        }
    }

    /// Existing record shown by the form, if any.
    #[must_use]
    pub fn record(&self) -> Option<&User> {
        match self {
            Self::Add => None,
            Self::Edit(user) | Self::View(user) => Some(user),
        }
    }

    /// `true` for the view mode.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self, Self::View(_))
    }
}

/// Current contents of the name and email inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    /// Name input.
    pub name: String,
    /// Email input.
    pub email: String,
}

impl FormValues {
    /// Inputs holding the given values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Result of a submission that did not fail at the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; see [`UserForm::errors`].
    Invalid,
    /// The backend stored the record.
    Saved,
}

/// Stateful user form scoped to one page instance.
#[derive(Debug)]
pub struct UserForm {
    mode: FormMode,
    values: FormValues,
    errors: FormErrors,
    notifications: NotificationDisplay,
    redirect_to: String,
}

impl UserForm {
    /// Mount a form; inputs start from the record when there is one.
    ///
    /// `redirect_to` is the page visited once a success notification is
    /// dismissed.
    pub fn new(mode: FormMode, clock: SharedClock, redirect_to: impl Into<String>) -> Self {
        let values = mode
            .record()
            .map(|user| FormValues::new(user.name(), user.email()))
            .unwrap_or_default();
        Self {
            mode,
            values,
            errors: FormErrors::default(),
            notifications: NotificationDisplay::new(clock),
            redirect_to: redirect_to.into(),
        }
    }

    /// Mounted mode.
    #[must_use]
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Input contents as last submitted or loaded.
    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Errors from the latest submission attempt.
    #[must_use]
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Notification slot.
    #[must_use]
    pub fn notifications(&self) -> &NotificationDisplay {
        &self.notifications
    }

    /// Mutable notification slot, for polling or manual dismissal.
    pub fn notifications_mut(&mut self) -> &mut NotificationDisplay {
        &mut self.notifications
    }

    /// Validate `values` and, when valid, create or update the record.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::InvalidRequest`] when the form is
    /// read-only, and the mapped backend error when the call fails. Backend
    /// failures also leave an error notification on the form.
    pub async fn submit(
        &mut self,
        values: FormValues,
        directory: &dyn UserDirectory,
    ) -> Result<SubmitOutcome, Error> {
        if self.mode.is_read_only() {
            return Err(Error::invalid_request("user information is read-only"));
        }

        self.values = values;
        self.errors = validate(Candidate::new(&self.values.name, &self.values.email));
        if !self.errors.is_empty() {
            tracing::debug!(count = self.errors.len(), "user form rejected by validation");
            return Ok(SubmitOutcome::Invalid);
        }

        let result = match &self.mode {
            FormMode::Add => {
                let draft = UserDraft::new(&self.values.name, &self.values.email);
                directory.create_user(&draft).await
            }
            FormMode::Edit(user) => {
                let draft = user.revise(&self.values.name, &self.values.email);
                directory.update_user(&draft).await
            }
            FormMode::View(_) => {
                return Err(Error::invalid_request("user information is read-only"));
            }
        };

        match result {
            Ok(()) => {
                let message = match self.mode {
                    FormMode::Add => "User added successfully!",
                    _ => "User updated successfully!",
                };
                self.notifications.show(
                    Notification::success(message),
                    OnDismiss::Navigate(self.redirect_to.clone()),
                );
                Ok(SubmitOutcome::Saved)
            }
            Err(error) => {
                let action = match self.mode {
                    FormMode::Add => "Add",
                    _ => "Update",
                };
                self.notifications.show(
                    Notification::error(format!("{action} data failed: {error}")),
                    OnDismiss::Stay,
                );
                Err(error.into())
            }
        }
    }
}
