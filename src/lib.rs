//! Browser-side enhancements for the Glitched Box storefront pages.
//!
//! The markup is rendered elsewhere; this crate is compiled to WebAssembly and
//! attaches behavior to it: dark/light theme switching, sticky header offsets,
//! the mobile search overlay, newsletter email validation, scroll reveal
//! animations, and the FAQ accordion.
//!
//! Every controller is a plain state machine that turns an input into a list of
//! [`action::Action`]s. The `hydrate`-only [`dom`] adapter discovers elements,
//! forwards browser events, and executes those actions, so the controllers are
//! testable without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`storefront`] | Aggregate that owns every controller and dispatches [`storefront::UiEvent`]s |
//! | [`theme`] | Theme resolution and the theme controller |
//! | [`store`] | Persisted preference store (`localStorage` or in-memory) |
//! | [`layout`] | Sticky header / breadcrumbs height publication |
//! | [`search`] | Mobile search overlay open/close state |
//! | [`newsletter`] | Email shape check and newsletter field state |
//! | [`reveal`] | One-way reveal-on-scroll markers |
//! | [`faq`] | Single-open FAQ accordion |
//! | [`cart`] | Cart badge visibility |
//! | [`action`] | Side-effect list shared by all controllers |
//! | [`config`] | Selector contract and tunables, overridable from the page |
//! | [`consts`] | Class names, attribute names, and defaults |
//! | [`error`] | Error type for adapter and config failures |

pub mod action;
pub mod cart;
pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod faq;
pub mod layout;
pub mod newsletter;
pub mod reveal;
pub mod search;
pub mod store;
pub mod storefront;
pub mod theme;

#[cfg(test)]
mod test_page;

/// WASM entry point: installs panic/console hooks and enhances the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    dom::start();
}
