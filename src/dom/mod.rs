//! Browser adapter, compiled only with the `hydrate` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! `page` finds the elements the storefront markup provides, `wire` forwards
//! their events into [`crate::storefront::Storefront`], and `exec` carries out
//! the returned actions. Everything runs on the page's single UI thread, so the
//! shared state is `Rc<RefCell<_>>` and callbacks never hold a borrow across a
//! dispatch.

mod exec;
mod page;
mod wire;

use std::cell::RefCell;

use web_sys::IntersectionObserver;

use crate::store::LocalStore;
use crate::storefront::Storefront;

pub use wire::start;

pub(crate) struct Runtime {
    page: page::Page,
    core: RefCell<Storefront<LocalStore>>,
    observer: RefCell<Option<IntersectionObserver>>,
}
