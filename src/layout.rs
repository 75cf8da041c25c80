//! Sticky offsets for layout consumers.
//!
//! The header and breadcrumbs bar heights are republished as `--header-h` and
//! `--breadcrumbs-h` on `<html>` so stylesheet rules can sit content below them
//! without measuring anything themselves.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::action::{Action, Target};
use crate::consts::{BREADCRUMBS_HEIGHT_PROP, HEADER_HEIGHT_PROP};

/// Rendered heights in CSS pixels; `None` when the element is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutMetrics {
    pub header: Option<f64>,
    pub breadcrumbs: Option<f64>,
}

impl LayoutMetrics {
    /// Custom property writes for every measured element. Idempotent.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(2);
        if let Some(height) = self.header {
            actions.push(Action::SetStyle {
                target: Target::Root,
                property: HEADER_HEIGHT_PROP,
                value: css_px(height),
            });
        }
        if let Some(height) = self.breadcrumbs {
            actions.push(Action::SetStyle {
                target: Target::Root,
                property: BREADCRUMBS_HEIGHT_PROP,
                value: css_px(height),
            });
        }
        actions
    }
}

/// Height rounded up to a whole pixel, e.g. `64.2` -> `"65px"`.
///
/// Negative and non-finite inputs publish `0px`.
pub fn css_px(height: f64) -> String {
    let px = if height.is_finite() && height > 0.0 { height.ceil() } else { 0.0 };
    format!("{px}px")
}
