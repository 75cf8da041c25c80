//! Newsletter email field validation.
//!
//! The field is neutral, in error, or successful; the error and success
//! classes are never both present. Validation runs on blur, on input only while
//! the field shows an error (so typing is not nagged), and on submit. Submission
//! stays local: the default is prevented and no request is sent.

#[cfg(test)]
#[path = "newsletter_test.rs"]
mod newsletter_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::action::{Action, Target};
use crate::consts::{ARIA_INVALID, FIELD_ERROR_CLASS, FIELD_SUCCESS_CLASS, INVALID_EMAIL_MESSAGE, SUBSCRIBED_MESSAGE};

/// Permissive shape check, not RFC 5322: `local@domain.tld` with no whitespace
/// and exactly one `@`.
/// U+FEFF counts as whitespace in browsers but not in `\s` or `str::trim`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern is valid")
});

/// True when the trimmed value looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(trim_field(value))
}

/// Browser-style trim: Unicode whitespace plus the byte order mark.
fn trim_field(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Error,
    Success,
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterField {
    wired: bool,
    state: FieldState,
    help: String,
}

impl NewsletterField {
    /// `wired` is false unless the page has both the form and the input.
    pub fn new(wired: bool) -> Self {
        Self { wired, ..Self::default() }
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn on_blur(&mut self, value: &str) -> Vec<Action> {
        if !self.wired {
            return Vec::new();
        }
        let value = trim_field(value);
        if value.is_empty() {
            self.reset()
        } else if is_valid_email(value) {
            self.succeed("")
        } else {
            self.fail(INVALID_EMAIL_MESSAGE)
        }
    }

    pub fn on_input(&mut self, value: &str) -> Vec<Action> {
        if !self.wired || self.state != FieldState::Error {
            return Vec::new();
        }
        let value = trim_field(value);
        if value.is_empty() {
            self.reset()
        } else if is_valid_email(value) {
            self.succeed("")
        } else {
            Vec::new()
        }
    }

    pub fn on_submit(&mut self, value: &str) -> Vec<Action> {
        if !self.wired {
            return Vec::new();
        }
        let mut actions = vec![Action::PreventDefault];
        if is_valid_email(value) {
            actions.extend(self.succeed(SUBSCRIBED_MESSAGE));
        } else {
            actions.extend(self.fail(INVALID_EMAIL_MESSAGE));
        }
        actions
    }

    fn reset(&mut self) -> Vec<Action> {
        self.state = FieldState::Neutral;
        self.help.clear();
        vec![
            Action::RemoveClass { target: Target::NewsletterInput, class: FIELD_ERROR_CLASS },
            Action::RemoveClass { target: Target::NewsletterInput, class: FIELD_SUCCESS_CLASS },
            Action::RemoveAttribute { target: Target::NewsletterInput, name: ARIA_INVALID },
            Action::SetText { target: Target::NewsletterHelp, text: String::new() },
        ]
    }

    fn fail(&mut self, message: &str) -> Vec<Action> {
        self.state = FieldState::Error;
        message.clone_into(&mut self.help);
        vec![
            Action::AddClass { target: Target::NewsletterInput, class: FIELD_ERROR_CLASS },
            Action::RemoveClass { target: Target::NewsletterInput, class: FIELD_SUCCESS_CLASS },
            Action::set_attr(Target::NewsletterInput, ARIA_INVALID, "true"),
            Action::SetText { target: Target::NewsletterHelp, text: message.to_owned() },
        ]
    }

    fn succeed(&mut self, message: &str) -> Vec<Action> {
        self.state = FieldState::Success;
        message.clone_into(&mut self.help);
        vec![
            Action::AddClass { target: Target::NewsletterInput, class: FIELD_SUCCESS_CLASS },
            Action::RemoveClass { target: Target::NewsletterInput, class: FIELD_ERROR_CLASS },
            Action::set_attr(Target::NewsletterInput, ARIA_INVALID, "false"),
            Action::SetText { target: Target::NewsletterHelp, text: message.to_owned() },
        ]
    }
}
