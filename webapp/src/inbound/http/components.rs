//! Reusable page elements.

use serde::Serialize;

/// Visual style of a [`Button`]; serialises to the CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Main action of the page.
    Primary,
    /// Cancel and back links.
    Secondary,
    /// Edit.
    Success,
    /// Destructive actions.
    Danger,
    /// View.
    Info,
}

/// What activating a [`Button`] does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonAction {
    /// Follow a link; rendered as an anchor styled as a button.
    Navigate {
        /// Link target.
        href: String,
    },
    /// Submit the enclosing form, optionally to a different action.
    Submit {
        /// Overrides the form's `action` when set.
        form_action: Option<String>,
    },
}

/// Button or button-styled link.
///
/// # Examples
/// ```
/// use webapp::inbound::http::components::{Button, ButtonAction, ButtonStyle};
///
/// let edit = Button::link("Edit", "/user/edit/1", ButtonStyle::Success);
/// assert_eq!(
///     edit.action,
///     ButtonAction::Navigate { href: "/user/edit/1".into() }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Visible text.
    pub label: String,
    /// CSS modifier.
    pub style: ButtonStyle,
    /// Link or submit behaviour.
    pub action: ButtonAction,
}

impl Button {
    /// Button-styled link to `href`.
    pub fn link(label: impl Into<String>, href: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            style,
            action: ButtonAction::Navigate { href: href.into() },
        }
    }

    /// Submit button for the enclosing form.
    pub fn submit(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            label: label.into(),
            style,
            action: ButtonAction::Submit { form_action: None },
        }
    }

    /// Submit the enclosing form to `form_action` instead of its own action.
    #[must_use]
    pub fn with_form_action(mut self, form_action: impl Into<String>) -> Self {
        self.action = ButtonAction::Submit {
            form_action: Some(form_action.into()),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn link_serialises_for_templates() {
        let value = serde_json::to_value(Button::link("View", "/user/view/1", ButtonStyle::Info))
            .expect("serialises");
        assert_eq!(
            value,
            json!({
                "label": "View",
                "style": "info",
                "action": { "kind": "navigate", "href": "/user/view/1" }
            })
        );
    }

    #[test]
    fn submit_can_target_another_action() {
        let button =
            Button::submit("Delete", ButtonStyle::Danger).with_form_action("/user/delete/2");
        assert_eq!(
            button.action,
            ButtonAction::Submit {
                form_action: Some("/user/delete/2".into())
            }
        );
    }
}
