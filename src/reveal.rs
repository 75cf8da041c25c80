//! Reveal-on-scroll markers.
//!
//! Each observed element gains `is-visible` the first time it intersects the
//! (bottom-inset) viewport. The marker is never removed, so the element is
//! unobserved as soon as it is revealed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::action::{Action, Target};
use crate::consts::REVEALED_CLASS;

/// One entry of an intersection batch, keyed by the element's position in the
/// observed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn on_intersections(&mut self, batch: &[Intersection]) -> Vec<Action> {
        let mut actions = Vec::new();
        for entry in batch.iter().filter(|e| e.is_intersecting) {
            let Some(revealed) = self.revealed.get_mut(entry.index) else {
                continue;
            };
            if *revealed {
                continue;
            }
            *revealed = true;
            let target = Target::Reveal(entry.index);
            actions.push(Action::AddClass { target, class: REVEALED_CLASS });
            actions.push(Action::Unobserve(target));
        }
        actions
    }
}
