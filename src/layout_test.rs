use super::*;
use crate::test_page::FakePage;

#[test]
fn css_px_rounds_up() {
    assert_eq!(css_px(64.2), "65px");
    assert_eq!(css_px(64.0), "64px");
    assert_eq!(css_px(0.01), "1px");
}

#[test]
fn css_px_clamps_degenerate_heights() {
    assert_eq!(css_px(0.0), "0px");
    assert_eq!(css_px(-3.5), "0px");
    assert_eq!(css_px(f64::NAN), "0px");
    assert_eq!(css_px(f64::INFINITY), "0px");
}

#[test]
fn actions_publish_both_properties() {
    let metrics = LayoutMetrics { header: Some(72.4), breadcrumbs: Some(40.0) };
    let mut page = FakePage::default();
    page.apply(&metrics.actions());
    assert_eq!(page.style(Target::Root, "--header-h"), Some("73px"));
    assert_eq!(page.style(Target::Root, "--breadcrumbs-h"), Some("40px"));
}

#[test]
fn actions_skip_missing_breadcrumbs() {
    let metrics = LayoutMetrics { header: Some(60.0), breadcrumbs: None };
    let actions = metrics.actions();
    assert_eq!(actions.len(), 1);
    assert!(matches!(&actions[0], Action::SetStyle { property: "--header-h", .. }));
}

#[test]
fn actions_empty_when_nothing_measured() {
    assert!(LayoutMetrics::default().actions().is_empty());
}

#[test]
fn repeated_sync_publishes_identical_values() {
    let metrics = LayoutMetrics { header: Some(88.6), breadcrumbs: Some(31.1) };
    let mut page = FakePage::default();
    page.apply(&metrics.actions());
    let first = page.styles.clone();
    page.apply(&metrics.actions());
    assert_eq!(page.styles, first);
    assert_eq!(metrics.actions(), metrics.actions());
}
