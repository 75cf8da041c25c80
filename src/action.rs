//! Side effects requested by the controllers.
//!
//! Controllers never touch the DOM. They return `Vec<Action>` and the browser
//! adapter executes the list in order, skipping targets that are not on the page.

/// Element an action applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    Body,
    ThemeToggle,
    HeaderLogo,
    SearchOverlay,
    SearchInput,
    NewsletterInput,
    NewsletterHelp,
    CartBadge,
    /// FAQ trigger button at the given position.
    FaqTrigger(usize),
    /// Panel following the FAQ trigger at the given position.
    FaqPanel(usize),
    /// Icon inside the FAQ trigger at the given position.
    FaqIcon(usize),
    /// Reveal-on-scroll element at the given position.
    Reveal(usize),
}

/// When a deferred action runs relative to the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defer {
    Now,
    /// Zero-delay timeout, after the current task finishes.
    NextTick,
    /// `requestAnimationFrame`.
    NextFrame,
    AfterMs(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetAttribute { target: Target, name: &'static str, value: String },
    RemoveAttribute { target: Target, name: &'static str },
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    /// Only applies when the target is a checkbox-like input.
    SetChecked { target: Target, checked: bool },
    SetSrc { target: Target, src: String },
    SetText { target: Target, text: String },
    /// Inline style property, including CSS custom properties.
    SetStyle { target: Target, property: &'static str, value: String },
    Focus { target: Target, defer: Defer },
    /// Cancel the browser default for the event being handled.
    PreventDefault,
    /// Measure sticky elements and republish their heights.
    SyncLayout(Defer),
    /// Stop watching a reveal element for viewport intersections.
    Unobserve(Target),
}

impl Action {
    pub(crate) fn set_attr(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name, value: value.into() }
    }

    pub(crate) fn toggle_class(target: Target, class: &'static str, on: bool) -> Self {
        if on { Self::AddClass { target, class } } else { Self::RemoveClass { target, class } }
    }
}

pub(crate) fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
