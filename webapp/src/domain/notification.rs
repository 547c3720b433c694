//! Transient feedback banner with a fixed auto-dismiss window.
//!
//! [`NotificationDisplay`] is a two-state machine (`hidden`, `visible`).
//! Showing a notification arms a 3000 ms deadline exactly once; reading or
//! rendering the banner never re-arms it. Expiry ([`NotificationDisplay::poll`])
//! and manual close ([`NotificationDisplay::dismiss`]) both hand back the same
//! [`Dismissal`], at most once per shown notification.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::Serialize;

/// Milliseconds a notification stays visible unless closed earlier.
pub const AUTO_DISMISS_MS: i64 = 3000;

/// Shared clock handle used to arm and check deadlines.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Category of a notification, which also drives its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Neutral progress information.
    Info,
}

/// Message shown in the banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Banner category.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
}

impl Notification {
    /// Success banner.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Error banner.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Informational banner.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }
}

/// Caller-supplied behaviour once a notification is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnDismiss {
    /// Hide the banner and stay on the page.
    Stay,
    /// Hide the banner and navigate to the given path.
    Navigate(String),
}

/// Outcome of dismissing a visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dismissal {
    /// The notification that was hidden.
    pub notification: Notification,
    /// Where to navigate next, when the caller asked for it.
    pub navigate_to: Option<String>,
}

/// Render-ready snapshot of the visible banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    /// Banner category.
    pub kind: NotificationKind,
    /// Text shown to the user.
    pub message: String,
    /// Time left before the banner dismisses itself.
    pub remaining_ms: u64,
    /// Navigation target applied on dismissal.
    pub navigate_to: Option<String>,
}

#[derive(Debug, Clone)]
struct Visible {
    notification: Notification,
    on_dismiss: OnDismiss,
    deadline: DateTime<Utc>,
}

impl Visible {
    fn into_dismissal(self) -> Dismissal {
        let navigate_to = match self.on_dismiss {
            OnDismiss::Stay => None,
            OnDismiss::Navigate(path) => Some(path),
        };
        Dismissal {
            notification: self.notification,
            navigate_to,
        }
    }
}

/// Single-slot notification display.
pub struct NotificationDisplay {
    clock: SharedClock,
    visible: Option<Visible>,
}

impl NotificationDisplay {
    /// Hidden display driven by `clock`.
    #[must_use]
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            visible: None,
        }
    }

    /// Show `notification`, replacing whatever is visible, and arm the
    /// auto-dismiss deadline.
    pub fn show(&mut self, notification: Notification, on_dismiss: OnDismiss) {
        let deadline = self.clock.utc() + TimeDelta::milliseconds(AUTO_DISMISS_MS);
        if let Some(previous) = self.visible.as_ref() {
            tracing::debug!(
                replaced = %previous.notification.message,
                "notification replaced before dismissal"
            );
        }
        self.visible = Some(Visible {
            notification,
            on_dismiss,
            deadline,
        });
    }

    /// `true` while a notification is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible.is_some()
    }

    /// The visible notification, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.visible.as_ref().map(|visible| &visible.notification)
    }

    /// Time left before the visible notification expires.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        let visible = self.visible.as_ref()?;
        let left = visible.deadline - self.clock.utc();
        Some(left.to_std().unwrap_or(Duration::ZERO))
    }

    /// Dismiss the notification if its deadline has passed.
    pub fn poll(&mut self) -> Option<Dismissal> {
        let expired = self
            .visible
            .as_ref()
            .is_some_and(|visible| self.clock.utc() >= visible.deadline);
        if expired { self.dismiss() } else { None }
    }

    /// Close the notification now, cancelling its deadline.
    pub fn dismiss(&mut self) -> Option<Dismissal> {
        self.visible.take().map(Visible::into_dismissal)
    }

    /// Snapshot for rendering; does not touch the deadline.
    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        let visible = self.visible.as_ref()?;
        let remaining_ms = self
            .remaining()
            .map_or(0, |left| u64::try_from(left.as_millis()).unwrap_or(u64::MAX));
        let navigate_to = match &visible.on_dismiss {
            OnDismiss::Stay => None,
            OnDismiss::Navigate(path) => Some(path.clone()),
        };
        Some(Banner {
            kind: visible.notification.kind,
            message: visible.notification.message.clone(),
            remaining_ms,
            navigate_to,
        })
    }
}

impl std::fmt::Debug for NotificationDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDisplay")
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
