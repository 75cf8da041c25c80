use super::*;
use crate::test_page::FakePage;

#[test]
fn starts_closed() {
    assert!(!SearchOverlay::new(true).is_open());
}

#[test]
fn open_sets_class_aria_lock_and_defers_focus() {
    let mut overlay = SearchOverlay::new(true);
    let mut page = FakePage::default();
    page.apply(&overlay.open());

    assert!(overlay.is_open());
    assert!(page.has_class(Target::SearchOverlay, "is-open"));
    assert_eq!(page.attr(Target::SearchOverlay, "aria-hidden"), Some("false"));
    assert!(page.has_class(Target::Body, "is-locked"));
    assert_eq!(page.focused, vec![(Target::SearchInput, Defer::NextTick)]);
}

#[test]
fn open_then_close_restores_hidden_state() {
    let mut overlay = SearchOverlay::new(true);
    let mut page = FakePage::default();
    page.apply(&overlay.open());
    page.apply(&overlay.close());

    assert!(!overlay.is_open());
    assert!(!page.has_class(Target::SearchOverlay, "is-open"));
    assert_eq!(page.attr(Target::SearchOverlay, "aria-hidden"), Some("true"));
    assert!(!page.has_class(Target::Body, "is-locked"));
}

#[test]
fn close_when_closed_writes_nothing() {
    let mut overlay = SearchOverlay::new(true);
    assert!(overlay.close().is_empty());

    let mut page = FakePage::default();
    page.apply(&overlay.open());
    page.apply(&overlay.close());
    let writes = page.writes;
    page.apply(&overlay.close());
    assert_eq!(page.writes, writes);
}

#[test]
fn escape_closes_other_keys_ignored() {
    let mut overlay = SearchOverlay::new(true);
    overlay.open();
    assert!(overlay.on_key("Enter").is_empty());
    assert!(overlay.is_open());
    assert!(!overlay.on_key("Escape").is_empty());
    assert!(!overlay.is_open());
}

#[test]
fn escape_while_closed_is_noop() {
    let mut overlay = SearchOverlay::new(true);
    assert!(overlay.on_key("Escape").is_empty());
}

#[test]
fn absent_overlay_ignores_everything() {
    let mut overlay = SearchOverlay::new(false);
    assert!(overlay.open().is_empty());
    assert!(!overlay.is_open());
    assert!(overlay.close().is_empty());
    assert!(overlay.on_key("Escape").is_empty());
}
