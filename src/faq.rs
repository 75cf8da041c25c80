//! Single-open FAQ accordion.
//!
//! A click closes every item, then reopens the clicked one if it was closed.
//! Clicking the open item therefore leaves nothing open.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use crate::action::{Action, Target, bool_attr};
use crate::consts::{ARIA_EXPANDED, FAQ_ICON_CLOSED, FAQ_ICON_OPEN};

/// Initial state of one trigger as found in the markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqItem {
    /// `aria-expanded="true"` on the trigger.
    pub expanded: bool,
    /// The next sibling is a `faq__panel`.
    pub has_panel: bool,
    /// The trigger contains a `.faq__icon`.
    pub has_icon: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Accordion {
    items: Vec<FaqItem>,
}

impl Accordion {
    pub fn new(items: Vec<FaqItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.expanded)
    }

    pub fn open_count(&self) -> usize {
        self.items.iter().filter(|item| item.expanded).count()
    }

    pub fn click(&mut self, index: usize) -> Vec<Action> {
        let Some(was_open) = self.items.get(index).map(|item| item.expanded) else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        for i in 0..self.items.len() {
            actions.extend(self.set_expanded(i, false));
        }
        if !was_open {
            actions.extend(self.set_expanded(index, true));
        }
        actions
    }

    fn set_expanded(&mut self, index: usize, expanded: bool) -> Vec<Action> {
        let Some(item) = self.items.get_mut(index) else {
            return Vec::new();
        };
        item.expanded = expanded;

        let mut actions = vec![Action::set_attr(Target::FaqTrigger(index), ARIA_EXPANDED, bool_attr(expanded))];
        if item.has_panel {
            actions.push(Action::SetStyle {
                target: Target::FaqPanel(index),
                property: "display",
                value: if expanded { "block" } else { "none" }.to_owned(),
            });
        }
        if item.has_icon {
            actions.push(Action::SetText {
                target: Target::FaqIcon(index),
                text: if expanded { FAQ_ICON_OPEN } else { FAQ_ICON_CLOSED }.to_owned(),
            });
        }
        actions
    }
}
