//! Presence and format checks for submitted user fields.
//!
//! Both the add and the edit flow run [`validate`] before any backend call.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Message emitted when the name or the email is an empty string.
pub const MESSAGE_FIELD_REQUIRED: &str = "Please fill in all required fields";
/// Message emitted when the email is not shaped like `local@domain.tld`.
pub const MESSAGE_EMAIL_FORMAT: &str = "Invalid email format";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Field values as submitted; a missing field is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Submitted name.
    pub name: Option<&'a str>,
    /// Submitted email.
    pub email: Option<&'a str>,
}

impl<'a> Candidate<'a> {
    /// Candidate with both fields present.
    #[must_use]
    pub fn new(name: &'a str, email: &'a str) -> Self {
        Self {
            name: Some(name),
            email: Some(email),
        }
    }
}

/// Ordered validation messages for one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(Vec<String>);

impl FormErrors {
    /// `true` when the candidate passed every rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages in rule order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn push(&mut self, message: &str) {
        self.0.push(message.to_owned());
    }
}

/// Check a candidate against the required-field and email-format rules.
///
/// The rules are independent: an empty name with a malformed email yields
/// both messages, required first.
///
/// # Examples
/// ```
/// use webapp::domain::validation::{validate, Candidate, MESSAGE_EMAIL_FORMAT};
///
/// let errors = validate(Candidate::new("Ada", "ada@"));
/// assert_eq!(errors.iter().collect::<Vec<_>>(), vec![MESSAGE_EMAIL_FORMAT]);
/// assert!(validate(Candidate::new("Ada", "ada@example.com")).is_empty());
/// ```
#[must_use]
pub fn validate(candidate: Candidate<'_>) -> FormErrors {
    let mut errors = FormErrors::default();

    if candidate.name == Some("") || candidate.email == Some("") {
        errors.push(MESSAGE_FIELD_REQUIRED);
    }

    if let Some(email) = candidate.email.filter(|email| !email.is_empty()) {
        if !email_regex().is_match(email) {
            errors.push(MESSAGE_EMAIL_FORMAT);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn messages(errors: &FormErrors) -> Vec<&str> {
        errors.iter().collect()
    }

    #[test]
    fn both_fields_empty_yield_one_required_error() {
        let errors = validate(Candidate::new("", ""));
        assert_eq!(messages(&errors), vec![MESSAGE_FIELD_REQUIRED]);
    }

    #[test]
    fn malformed_email_yields_one_format_error() {
        let errors = validate(Candidate::new("a", "not-an-email"));
        assert_eq!(messages(&errors), vec![MESSAGE_EMAIL_FORMAT]);
    }

    #[test]
    fn valid_candidate_has_no_errors() {
        assert!(validate(Candidate::new("a", "a@b.com")).is_empty());
    }

    #[test]
    fn empty_name_and_bad_email_yield_both_errors_in_order() {
        let errors = validate(Candidate::new("", "nope"));
        assert_eq!(
            messages(&errors),
            vec![MESSAGE_FIELD_REQUIRED, MESSAGE_EMAIL_FORMAT]
        );
    }

    #[test]
    fn missing_fields_are_not_empty_strings() {
        assert!(validate(Candidate::default()).is_empty());
    }

    #[rstest]
    #[case("a@b.co")]
    #[case("first.last+tag@sub.example.org")]
    fn accepts_well_formed_emails(#[case] email: &str) {
        assert!(validate(Candidate::new("n", email)).is_empty());
    }

    #[rstest]
    #[case("a@b")]
    #[case("@b.com")]
    #[case("a b@c.com")]
    #[case("a@@b.com")]
    fn rejects_malformed_emails(#[case] email: &str) {
        assert_eq!(messages(&validate(Candidate::new("n", email))), vec![MESSAGE_EMAIL_FORMAT]);
    }
}
