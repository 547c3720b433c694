//! User data model.
//!
//! The users backend assigns identifiers. Some deployments hand out integers,
//! others strings, so [`UserId`] keeps whichever JSON representation arrived
//! and echoes it back unchanged on updates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned user identifier.
///
/// Serialises as the bare JSON number or string it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric identifier, e.g. `1`.
    Number(i64),
    /// Opaque string identifier, e.g. `"3fa85f64"`.
    Text(String),
}

impl UserId {
    /// Lookup key taken from a page path segment.
    ///
    /// A path carries no JSON type, so the result is always
    /// [`UserId::Text`]; match it against stored records with
    /// [`UserId::same_key`] and send the stored record's own id to the
    /// backend. Returns `None` for blank segments.
    ///
    /// # Examples
    /// ```
    /// use webapp::domain::UserId;
    ///
    /// let key = UserId::from_path_segment("12").expect("key");
    /// assert_eq!(key, UserId::Text("12".to_owned()));
    /// assert!(UserId::Number(12).same_key(&key));
    /// assert_eq!(UserId::from_path_segment("  "), None);
    /// ```
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        let trimmed = segment.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::Text(trimmed.to_owned()))
    }

    /// Whether both ids render the same path segment, whatever their JSON
    /// type.
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }

    /// JSON text of the id, as carried by the edit form's hidden field.
    ///
    /// ```
    /// use webapp::domain::UserId;
    ///
    /// assert_eq!(UserId::Number(2).to_form_value(), "2");
    /// assert_eq!(UserId::Text("2".to_owned()).to_form_value(), r#""2""#);
    /// ```
    #[must_use]
    pub fn to_form_value(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => serde_json::Value::from(text.as_str()).to_string(),
        }
    }

    /// Inverse of [`UserId::to_form_value`]; `None` unless the value is a
    /// JSON integer or string.
    #[must_use]
    pub fn from_form_value(value: &str) -> Option<Self> {
        serde_json::from_str(value).ok()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A stored user record.
///
/// ## Invariants
/// - `id` is assigned by the backend and never changed by this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a user from its parts.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Backend-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Draft carrying this record's identity with replacement field values.
    #[must_use]
    pub fn revise(&self, name: impl Into<String>, email: impl Into<String>) -> UserDraft {
        UserDraft {
            id: Some(self.id.clone()),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial user submitted to the backend.
///
/// Creation drafts have no `id`; update drafts must carry the id of the
/// record they replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    name: String,
    email: String,
}

impl UserDraft {
    /// Draft for a brand new record.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Identifier of the record being updated, if any.
    #[must_use]
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    /// Submitted name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Submitted email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
