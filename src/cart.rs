//! Cart badge visibility.
//!
//! The badge text is rendered by the page; the badge is shown only when it
//! holds a positive number.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use crate::action::{Action, Target};
use crate::consts::CART_BADGE_SHOW_CLASS;

/// Numeric badge value. Blank text counts as zero; anything other than a plain
/// decimal (including `inf`, `NaN` and hex) is `None`.
pub fn badge_count(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }
    if !text.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')) {
        return None;
    }
    match text.parse::<f64>() {
        Ok(n) if !n.is_nan() => Some(n),
        _ => None,
    }
}

/// `show` class toggle for the badge, or nothing when there is no badge.
pub fn badge_actions(text: Option<&str>) -> Vec<Action> {
    let Some(text) = text else {
        return Vec::new();
    };
    let show = badge_count(text).is_some_and(|n| n > 0.0);
    vec![Action::toggle_class(Target::CartBadge, CART_BADGE_SHOW_CLASS, show)]
}
