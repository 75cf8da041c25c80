//! Element contract and tunables for the page enhancer.
//!
//! Defaults match the storefront markup. A page can override any subset with a
//! JSON block:
//!
//! ```html
//! <script type="application/json" id="gb-ui-config">
//!   { "selectors": { "header": [".site-header"] }, "initial_sync_delay_ms": 120 }
//! </script>
//! ```
//!
//! Selector lists are tried in order; the first match wins.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{INITIAL_SYNC_DELAY_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, THEME_STORAGE_KEY};
use crate::error::UiError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key for the theme preference.
    pub storage_key: String,
    pub initial_sync_delay_ms: u32,
    pub selectors: Selectors,
    pub reveal: RevealOptions,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            initial_sync_delay_ms: INITIAL_SYNC_DELAY_MS,
            selectors: Selectors::default(),
            reveal: RevealOptions::default(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), UiError> {
        if self.storage_key.trim().is_empty() {
            return Err(UiError::InvalidConfig("storage_key must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(UiError::InvalidConfig(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        Ok(())
    }
}

/// CSS selectors for every element the enhancer looks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub header: Vec<String>,
    pub breadcrumbs: Vec<String>,
    pub theme_toggle: Vec<String>,
    /// Image with `data-logo-dark` / `data-logo-light` variants.
    pub header_logo: Vec<String>,
    pub search_toggle: Vec<String>,
    pub search_overlay: Vec<String>,
    pub search_input: Vec<String>,
    /// Every match closes the overlay.
    pub search_close: String,
    pub cart_badge: Vec<String>,
    pub newsletter_form: Vec<String>,
    pub newsletter_input: Vec<String>,
    pub newsletter_help: Vec<String>,
    pub faq_root: Vec<String>,
    /// Triggers, matched inside the FAQ root.
    pub faq_trigger: String,
    /// Icon, matched inside each trigger.
    pub faq_icon: String,
    /// Every match is observed for reveal-on-scroll.
    pub reveal: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            header: list(&[".header"]),
            breadcrumbs: list(&[".breadcrumbs-bar"]),
            theme_toggle: list(&["[data-theme-toggle]", "#themeToggle"]),
            header_logo: list(&["#headerLogo"]),
            search_toggle: list(&["#searchToggle"]),
            search_overlay: list(&["#searchOverlay"]),
            search_input: list(&["#searchInputMobile"]),
            search_close: "[data-search-close]".into(),
            cart_badge: list(&["#cartBadge"]),
            newsletter_form: list(&["#newsletterForm", ".newsletter-form"]),
            newsletter_input: list(&["#newsletterEmail", ".newsletter-input"]),
            newsletter_help: list(&["#newsletterHelp", ".newsletter-help"]),
            faq_root: list(&["[data-faq]"]),
            faq_trigger: ".faq__item".into(),
            faq_icon: ".faq__icon".into(),
            reveal: ".animate-on-scroll".into(),
        }
    }
}

/// `IntersectionObserver` options for reveal-on-scroll.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN.to_owned() }
    }
}

fn list(selectors: &[&str]) -> Vec<String> {
    selectors.iter().map(|s| (*s).to_owned()).collect()
}
