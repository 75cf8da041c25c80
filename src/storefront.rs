//! Page-level aggregate.
//!
//! ARCHITECTURE
//! ============
//! Each browser event becomes a [`UiEvent`] dispatched to the owning controller;
//! the returned actions go back to the adapter. The only cross-controller link
//! is theme -> layout: applying a theme requests a layout sync, which the
//! adapter answers with [`UiEvent::LayoutMeasured`].

#[cfg(test)]
#[path = "storefront_test.rs"]
mod storefront_test;

use crate::action::{Action, Defer};
use crate::cart;
use crate::config::UiConfig;
use crate::faq::{Accordion, FaqItem};
use crate::layout::LayoutMetrics;
use crate::newsletter::NewsletterField;
use crate::reveal::{Intersection, RevealSet};
use crate::search::SearchOverlay;
use crate::store::PreferenceStore;
use crate::theme::{LogoVariants, ThemeController};

/// What the adapter found on the page at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    /// `data-theme` already on `<html>`, if any.
    pub root_theme: Option<String>,
    pub theme_toggle: bool,
    pub logo: LogoVariants,
    pub search_overlay: bool,
    /// Both the newsletter form and its input exist.
    pub newsletter: bool,
    /// Text of the cart badge, when the badge exists.
    pub cart_badge_text: Option<String>,
    pub faq_items: Vec<FaqItem>,
    pub reveal_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ThemeToggleChanged { checked: bool },
    SearchToggleClicked,
    SearchCloseClicked,
    KeyDown { key: String },
    WindowLoaded,
    WindowResized,
    LayoutMeasured(LayoutMetrics),
    NewsletterBlur { value: String },
    NewsletterInput { value: String },
    NewsletterSubmit { value: String },
    Intersections(Vec<Intersection>),
    FaqTriggerClicked { index: usize },
}

pub struct Storefront<S> {
    theme: ThemeController<S>,
    search: SearchOverlay,
    newsletter: NewsletterField,
    reveal: RevealSet,
    faq: Accordion,
    root_theme: Option<String>,
    cart_badge_text: Option<String>,
    initial_sync_delay_ms: u32,
}

impl<S: PreferenceStore> Storefront<S> {
    pub fn new(store: S, config: &UiConfig, snapshot: PageSnapshot) -> Self {
        Self {
            theme: ThemeController::new(store, config.storage_key.as_str(), snapshot.theme_toggle, snapshot.logo),
            search: SearchOverlay::new(snapshot.search_overlay),
            newsletter: NewsletterField::new(snapshot.newsletter),
            reveal: RevealSet::new(snapshot.reveal_count),
            faq: Accordion::new(snapshot.faq_items),
            root_theme: snapshot.root_theme,
            cart_badge_text: snapshot.cart_badge_text,
            initial_sync_delay_ms: config.initial_sync_delay_ms,
        }
    }

    /// Startup actions: initial theme, cart badge, and a delayed layout sync
    /// that catches late font loads.
    pub fn boot(&mut self) -> Vec<Action> {
        let initial = self.theme.initial_theme(self.root_theme.as_deref());
        let mut actions = self.theme.apply(initial);
        actions.extend(cart::badge_actions(self.cart_badge_text.as_deref()));
        actions.push(Action::SyncLayout(Defer::AfterMs(self.initial_sync_delay_ms)));
        actions
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Action> {
        match event {
            UiEvent::ThemeToggleChanged { checked } => self.theme.on_toggle_change(checked),
            UiEvent::SearchToggleClicked => self.search.open(),
            UiEvent::SearchCloseClicked => self.search.close(),
            UiEvent::KeyDown { key } => self.search.on_key(&key),
            UiEvent::WindowLoaded | UiEvent::WindowResized => vec![Action::SyncLayout(Defer::Now)],
            UiEvent::LayoutMeasured(metrics) => metrics.actions(),
            UiEvent::NewsletterBlur { value } => self.newsletter.on_blur(&value),
            UiEvent::NewsletterInput { value } => self.newsletter.on_input(&value),
            UiEvent::NewsletterSubmit { value } => self.newsletter.on_submit(&value),
            UiEvent::Intersections(batch) => self.reveal.on_intersections(&batch),
            UiEvent::FaqTriggerClicked { index } => self.faq.click(index),
        }
    }

    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    pub fn search(&self) -> &SearchOverlay {
        &self.search
    }

    pub fn newsletter(&self) -> &NewsletterField {
        &self.newsletter
    }

    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }

    pub fn faq(&self) -> &Accordion {
        &self.faq
    }
}
