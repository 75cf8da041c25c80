//! Mobile search overlay.
//!
//! Closed initially. The toggle opens it; close controls and `Escape` close it.
//! Opening locks body scroll and focuses the search input on the next tick so
//! focus lands after the overlay is painted.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::action::{Action, Defer, Target};
use crate::consts::{ARIA_HIDDEN, BODY_LOCK_CLASS, ESCAPE_KEY, OVERLAY_OPEN_CLASS};

#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    present: bool,
    open: bool,
}

impl SearchOverlay {
    /// `present` is false when the page has no overlay; every operation is then a no-op.
    pub fn new(present: bool) -> Self {
        Self { present, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> Vec<Action> {
        if !self.present || self.open {
            return Vec::new();
        }
        self.open = true;
        vec![
            Action::AddClass { target: Target::SearchOverlay, class: OVERLAY_OPEN_CLASS },
            Action::set_attr(Target::SearchOverlay, ARIA_HIDDEN, "false"),
            Action::AddClass { target: Target::Body, class: BODY_LOCK_CLASS },
            Action::Focus { target: Target::SearchInput, defer: Defer::NextTick },
        ]
    }

    pub fn close(&mut self) -> Vec<Action> {
        if !self.present || !self.open {
            return Vec::new();
        }
        self.open = false;
        vec![
            Action::RemoveClass { target: Target::SearchOverlay, class: OVERLAY_OPEN_CLASS },
            Action::set_attr(Target::SearchOverlay, ARIA_HIDDEN, "true"),
            Action::RemoveClass { target: Target::Body, class: BODY_LOCK_CLASS },
        ]
    }

    /// Document-wide `keydown`: `Escape` closes.
    pub fn on_key(&mut self, key: &str) -> Vec<Action> {
        if key == ESCAPE_KEY { self.close() } else { Vec::new() }
    }
}
