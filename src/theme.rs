//! Dark/light theme resolution and application.
//!
//! The active theme comes from the first usable source among the persisted
//! preference, the `data-theme` attribute already on `<html>`, and the `dark`
//! default. [`ThemeController::apply`] is the only mutation path; after it runs
//! the attribute, the stored preference, and the toggle control all agree.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::action::{Action, Defer, Target, bool_attr};
use crate::consts::{ARIA_CHECKED, THEME_ATTR};
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Exact match on `"dark"` / `"light"`; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Theme requested by the toggle: checked means dark.
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// First candidate that parses as a theme, else the default.
pub fn resolve_theme<I>(candidates: I) -> Theme
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .find_map(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Logo sources read from `data-logo-dark` / `data-logo-light`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogoVariants {
    pub dark: Option<String>,
    pub light: Option<String>,
}

impl LogoVariants {
    /// Source for `theme`, only when both variants are declared and non-empty.
    pub fn src_for(&self, theme: Theme) -> Option<&str> {
        let dark = self.dark.as_deref().filter(|s| !s.is_empty())?;
        let light = self.light.as_deref().filter(|s| !s.is_empty())?;
        Some(match theme {
            Theme::Dark => dark,
            Theme::Light => light,
        })
    }
}

pub struct ThemeController<S> {
    store: S,
    storage_key: String,
    toggle_present: bool,
    logo: LogoVariants,
    current: Option<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, storage_key: impl Into<String>, toggle_present: bool, logo: LogoVariants) -> Self {
        Self { store, storage_key: storage_key.into(), toggle_present, logo, current: None }
    }

    /// Stored preference, then the root attribute, then dark.
    pub fn initial_theme(&self, root_attr: Option<&str>) -> Theme {
        resolve_theme([self.store.get(&self.storage_key), root_attr.map(str::to_owned)])
    }

    /// Apply `theme` everywhere and persist it.
    ///
    /// A failed storage write is logged; the page still switches.
    pub fn apply(&mut self, theme: Theme) -> Vec<Action> {
        if let Err(err) = self.store.set(&self.storage_key, theme.as_str()) {
            leptos::logging::warn!("theme preference not saved: {err}");
        }
        self.current = Some(theme);

        let mut actions = vec![Action::set_attr(Target::Root, THEME_ATTR, theme.as_str())];
        if self.toggle_present {
            actions.push(Action::SetChecked { target: Target::ThemeToggle, checked: theme.is_dark() });
            actions.push(Action::set_attr(Target::ThemeToggle, ARIA_CHECKED, bool_attr(theme.is_dark())));
        }
        if let Some(src) = self.logo.src_for(theme) {
            actions.push(Action::SetSrc { target: Target::HeaderLogo, src: src.to_owned() });
        }
        // Logo and font swaps can change the header height.
        actions.push(Action::SyncLayout(Defer::NextFrame));
        actions
    }

    /// Toggle `change` event: the checked state selects the theme.
    pub fn on_toggle_change(&mut self, checked: bool) -> Vec<Action> {
        self.apply(Theme::from_checked(checked))
    }

    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
