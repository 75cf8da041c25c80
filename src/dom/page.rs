//! Element discovery and measurement.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, NodeList};

use crate::action::Target;
use crate::config::Selectors;
use crate::consts::{ARIA_EXPANDED, FAQ_PANEL_CLASS, LOGO_DARK_ATTR, LOGO_LIGHT_ATTR, THEME_ATTR};
use crate::faq::FaqItem;
use crate::layout::LayoutMetrics;
use crate::storefront::PageSnapshot;
use crate::theme::LogoVariants;

/// Handles to every element the enhancer may touch. All are optional.
pub(crate) struct Page {
    pub root: Option<Element>,
    pub body: Option<Element>,
    pub header: Option<Element>,
    pub breadcrumbs: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub header_logo: Option<Element>,
    pub search_toggle: Option<Element>,
    pub search_overlay: Option<Element>,
    pub search_input: Option<Element>,
    pub search_close: Vec<Element>,
    pub cart_badge: Option<Element>,
    pub newsletter_form: Option<Element>,
    pub newsletter_input: Option<Element>,
    pub newsletter_help: Option<Element>,
    pub faq_triggers: Vec<Element>,
    pub faq_panels: Vec<Option<Element>>,
    pub faq_icons: Vec<Option<Element>>,
    pub reveal: Vec<Element>,
}

impl Page {
    pub fn discover(document: &Document, selectors: &Selectors) -> Self {
        let faq_triggers = first_match(document, &selectors.faq_root)
            .map_or_else(Vec::new, |root| match root.query_selector_all(&selectors.faq_trigger) {
                Ok(list) => elements(&list),
                Err(err) => {
                    leptos::logging::warn!("bad selector {}: {err:?}", selectors.faq_trigger);
                    Vec::new()
                }
            });
        let faq_panels = faq_triggers.iter().map(panel_after).collect();
        let faq_icons = faq_triggers
            .iter()
            .map(|trigger| scoped_match(trigger, &selectors.faq_icon))
            .collect();

        Self {
            root: document.document_element(),
            body: document.body().map(Element::from),
            header: first_match(document, &selectors.header),
            breadcrumbs: first_match(document, &selectors.breadcrumbs),
            theme_toggle: first_match(document, &selectors.theme_toggle),
            header_logo: first_match(document, &selectors.header_logo),
            search_toggle: first_match(document, &selectors.search_toggle),
            search_overlay: first_match(document, &selectors.search_overlay),
            search_input: first_match(document, &selectors.search_input),
            search_close: all_matches(document, &selectors.search_close),
            cart_badge: first_match(document, &selectors.cart_badge),
            newsletter_form: first_match(document, &selectors.newsletter_form),
            newsletter_input: first_match(document, &selectors.newsletter_input),
            newsletter_help: first_match(document, &selectors.newsletter_help),
            faq_triggers,
            faq_panels,
            faq_icons,
            reveal: all_matches(document, &selectors.reveal),
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let logo = self.header_logo.as_ref().map_or_else(LogoVariants::default, |logo| LogoVariants {
            dark: logo.get_attribute(LOGO_DARK_ATTR),
            light: logo.get_attribute(LOGO_LIGHT_ATTR),
        });
        let faq_items = self
            .faq_triggers
            .iter()
            .enumerate()
            .map(|(i, trigger)| FaqItem {
                expanded: trigger.get_attribute(ARIA_EXPANDED).as_deref() == Some("true"),
                has_panel: self.faq_panels.get(i).is_some_and(Option::is_some),
                has_icon: self.faq_icons.get(i).is_some_and(Option::is_some),
            })
            .collect();

        PageSnapshot {
            root_theme: self.root.as_ref().and_then(|root| root.get_attribute(THEME_ATTR)),
            theme_toggle: self.theme_toggle.is_some(),
            logo,
            search_overlay: self.search_overlay.is_some(),
            newsletter: self.newsletter_form.is_some() && self.newsletter_input.is_some(),
            cart_badge_text: self.cart_badge.as_ref().map(|badge| badge.text_content().unwrap_or_default()),
            faq_items,
            reveal_count: self.reveal.len(),
        }
    }

    pub fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::Body => self.body.as_ref(),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::HeaderLogo => self.header_logo.as_ref(),
            Target::SearchOverlay => self.search_overlay.as_ref(),
            Target::SearchInput => self.search_input.as_ref(),
            Target::NewsletterInput => self.newsletter_input.as_ref(),
            Target::NewsletterHelp => self.newsletter_help.as_ref(),
            Target::CartBadge => self.cart_badge.as_ref(),
            Target::FaqTrigger(i) => self.faq_triggers.get(i),
            Target::FaqPanel(i) => self.faq_panels.get(i).and_then(Option::as_ref),
            Target::FaqIcon(i) => self.faq_icons.get(i).and_then(Option::as_ref),
            Target::Reveal(i) => self.reveal.get(i),
        }
    }

    pub fn reveal_index(&self, element: &Element) -> Option<usize> {
        self.reveal.iter().position(|candidate| candidate == element)
    }

    /// Checked state of the theme toggle; non-inputs read as unchecked.
    pub fn toggle_checked(&self) -> bool {
        self.theme_toggle
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlInputElement>())
            .is_some_and(HtmlInputElement::checked)
    }

    pub fn newsletter_value(&self) -> String {
        self.newsletter_input
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlInputElement>())
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    pub fn measure(&self) -> LayoutMetrics {
        LayoutMetrics {
            header: self.header.as_ref().map(|el| el.get_bounding_client_rect().height()),
            breadcrumbs: self.breadcrumbs.as_ref().map(|el| el.get_bounding_client_rect().height()),
        }
    }
}

/// First element matched by any candidate, trying candidates in order.
fn first_match(document: &Document, candidates: &[String]) -> Option<Element> {
    candidates.iter().find_map(|selector| match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            leptos::logging::warn!("bad selector {selector}: {err:?}");
            None
        }
    })
}

fn all_matches(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(err) => {
            leptos::logging::warn!("bad selector {selector}: {err:?}");
            Vec::new()
        }
    }
}

fn scoped_match(scope: &Element, selector: &str) -> Option<Element> {
    match scope.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            leptos::logging::warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

fn panel_after(trigger: &Element) -> Option<Element> {
    trigger
        .next_element_sibling()
        .filter(|sibling| sibling.class_list().contains(FAQ_PANEL_CLASS))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
