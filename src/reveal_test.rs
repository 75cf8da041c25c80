use super::*;
use crate::test_page::FakePage;

fn hit(index: usize) -> Intersection {
    Intersection { index, is_intersecting: true }
}

fn miss(index: usize) -> Intersection {
    Intersection { index, is_intersecting: false }
}

#[test]
fn new_set_has_nothing_revealed() {
    let set = RevealSet::new(3);
    assert_eq!(set.len(), 3);
    assert!((0..3).all(|i| !set.is_revealed(i)));
}

#[test]
fn intersecting_entries_get_marker_and_unobserved() {
    let mut set = RevealSet::new(3);
    let mut page = FakePage::default();
    page.apply(&set.on_intersections(&[hit(0), miss(1), hit(2)]));

    assert!(page.has_class(Target::Reveal(0), "is-visible"));
    assert!(!page.has_class(Target::Reveal(1), "is-visible"));
    assert!(page.has_class(Target::Reveal(2), "is-visible"));
    assert_eq!(page.unobserved, vec![Target::Reveal(0), Target::Reveal(2)]);
}

#[test]
fn marker_is_never_removed() {
    let mut set = RevealSet::new(2);
    let mut page = FakePage::default();
    page.apply(&set.on_intersections(&[hit(0)]));
    page.apply(&set.on_intersections(&[miss(0), miss(1)]));
    page.apply(&set.on_intersections(&[hit(0), miss(0)]));

    assert!(set.is_revealed(0));
    assert!(page.has_class(Target::Reveal(0), "is-visible"));
}

#[test]
fn already_revealed_entries_emit_nothing() {
    let mut set = RevealSet::new(1);
    set.on_intersections(&[hit(0)]);
    assert!(set.on_intersections(&[hit(0)]).is_empty());
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut set = RevealSet::new(1);
    assert!(set.on_intersections(&[hit(5)]).is_empty());
    assert!(!set.is_revealed(5));
}

#[test]
fn empty_set() {
    let mut set = RevealSet::default();
    assert!(set.is_empty());
    assert!(set.on_intersections(&[]).is_empty());
}
