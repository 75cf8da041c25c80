use super::*;
use crate::store::MemoryStore;
use crate::test_page::FakePage;

fn logo() -> LogoVariants {
    LogoVariants { dark: Some("/img/logo-dark.svg".into()), light: Some("/img/logo-light.svg".into()) }
}

fn controller(store: MemoryStore) -> ThemeController<MemoryStore> {
    ThemeController::new(store, "gb_theme", true, logo())
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_only_exact_names() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_from_checked_maps_checked_to_dark() {
    assert_eq!(Theme::from_checked(true), Theme::Dark);
    assert_eq!(Theme::from_checked(false), Theme::Light);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolve_prefers_first_valid_candidate() {
    let theme = resolve_theme([Some("light".to_owned()), Some("dark".to_owned())]);
    assert_eq!(theme, Theme::Light);
}

#[test]
fn resolve_skips_invalid_candidates() {
    let theme = resolve_theme([Some("neon".to_owned()), None, Some("light".to_owned())]);
    assert_eq!(theme, Theme::Light);
}

#[test]
fn resolve_falls_back_to_dark() {
    assert_eq!(resolve_theme([None, Some("bogus".to_owned())]), Theme::Dark);
    assert_eq!(resolve_theme(Vec::<Option<String>>::new()), Theme::Dark);
}

#[test]
fn initial_theme_prefers_stored_value_over_attribute() {
    let ctl = controller(MemoryStore::with("gb_theme", "light"));
    assert_eq!(ctl.initial_theme(Some("dark")), Theme::Light);
}

#[test]
fn initial_theme_uses_attribute_when_nothing_stored() {
    let ctl = controller(MemoryStore::new());
    assert_eq!(ctl.initial_theme(Some("light")), Theme::Light);
}

#[test]
fn initial_theme_ignores_corrupt_stored_value() {
    let ctl = controller(MemoryStore::with("gb_theme", "true"));
    assert_eq!(ctl.initial_theme(Some("light")), Theme::Light);
    assert_eq!(ctl.initial_theme(None), Theme::Dark);
}

// =============================================================
// Logo variants
// =============================================================

#[test]
fn logo_src_requires_both_variants() {
    let only_dark = LogoVariants { dark: Some("d.svg".into()), light: None };
    assert_eq!(only_dark.src_for(Theme::Dark), None);

    let empty_light = LogoVariants { dark: Some("d.svg".into()), light: Some(String::new()) };
    assert_eq!(empty_light.src_for(Theme::Light), None);

    assert_eq!(logo().src_for(Theme::Light), Some("/img/logo-light.svg"));
    assert_eq!(logo().src_for(Theme::Dark), Some("/img/logo-dark.svg"));
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_keeps_attribute_store_and_toggle_consistent() {
    for theme in [Theme::Dark, Theme::Light] {
        let mut ctl = controller(MemoryStore::new());
        let mut page = FakePage::default();
        page.apply(&ctl.apply(theme));

        assert_eq!(page.attr(Target::Root, "data-theme"), Some(theme.as_str()));
        assert_eq!(ctl.store().get("gb_theme").as_deref(), Some(theme.as_str()));
        assert_eq!(page.checked.get(&Target::ThemeToggle), Some(&theme.is_dark()));
        assert_eq!(
            page.attr(Target::ThemeToggle, "aria-checked"),
            Some(if theme.is_dark() { "true" } else { "false" })
        );
        assert_eq!(ctl.current(), Some(theme));
    }
}

#[test]
fn apply_swaps_logo_source() {
    let mut ctl = controller(MemoryStore::new());
    let mut page = FakePage::default();
    page.apply(&ctl.apply(Theme::Light));
    assert_eq!(page.src.get(&Target::HeaderLogo).map(String::as_str), Some("/img/logo-light.svg"));
}

#[test]
fn apply_schedules_layout_sync_on_next_frame() {
    let mut ctl = controller(MemoryStore::new());
    let actions = ctl.apply(Theme::Dark);
    assert_eq!(actions.last(), Some(&Action::SyncLayout(Defer::NextFrame)));
}

#[test]
fn apply_without_toggle_or_logo_only_touches_root() {
    let mut ctl = ThemeController::new(MemoryStore::new(), "gb_theme", false, LogoVariants::default());
    let actions = ctl.apply(Theme::Light);
    assert_eq!(
        actions,
        vec![Action::set_attr(Target::Root, "data-theme", "light"), Action::SyncLayout(Defer::NextFrame)]
    );
    assert_eq!(ctl.store().get("gb_theme").as_deref(), Some("light"));
}

#[test]
fn toggle_change_applies_requested_theme() {
    let mut ctl = controller(MemoryStore::new());
    let mut page = FakePage::default();
    page.apply(&ctl.apply(Theme::Dark));
    page.apply(&ctl.on_toggle_change(false));

    assert_eq!(page.attr(Target::Root, "data-theme"), Some("light"));
    assert_eq!(ctl.store().get("gb_theme").as_deref(), Some("light"));
    assert_eq!(page.checked.get(&Target::ThemeToggle), Some(&false));
}

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), crate::error::UiError> {
        Err(crate::error::UiError::Storage { key: key.to_owned(), detail: "quota".into() })
    }
}

#[test]
fn apply_still_updates_page_when_store_write_fails() {
    let mut ctl = ThemeController::new(FailingStore, "gb_theme", true, LogoVariants::default());
    let mut page = FakePage::default();
    page.apply(&ctl.apply(Theme::Light));
    assert_eq!(page.attr(Target::Root, "data-theme"), Some("light"));
    assert_eq!(ctl.current(), Some(Theme::Light));
}
