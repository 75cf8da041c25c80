//! Startup and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    KeyboardEvent, Window,
};

use super::Runtime;
use super::exec::{dispatch, run};
use super::page::Page;
use crate::config::{RevealOptions, UiConfig};
use crate::consts::CONFIG_SCRIPT_ID;
use crate::error::UiError;
use crate::reveal::Intersection;
use crate::store::LocalStore;
use crate::storefront::{Storefront, UiEvent};

/// Enhance the page once the document has been parsed.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::warn!("storefront enhancer not started: {}", UiError::NoDocument);
        return;
    };
    if document.ready_state() == "loading" {
        if let Err(err) = listen(&document, "DOMContentLoaded", |_| enhance_or_warn()) {
            leptos::logging::warn!("{err}");
        }
    } else {
        enhance_or_warn();
    }
}

fn enhance_or_warn() {
    if let Err(err) = enhance() {
        leptos::logging::warn!("storefront enhancer not started: {err}");
    }
}

fn enhance() -> Result<(), UiError> {
    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    let config = load_config(&document);
    let page = Page::discover(&document, &config.selectors);
    let core = Storefront::new(LocalStore::from_window(&window), &config, page.snapshot());
    let rt = Rc::new(Runtime { page, core: RefCell::new(core), observer: RefCell::new(None) });

    let actions = rt.core.borrow_mut().boot();
    run(&rt, actions, None);

    let wired = [
        wire_theme(&rt),
        wire_search(&rt, &document),
        wire_layout(&rt, &window),
        wire_newsletter(&rt),
        wire_faq(&rt),
        observe_reveals(&rt, &config.reveal),
    ];
    for result in wired {
        if let Err(err) = result {
            leptos::logging::warn!("{err}");
        }
    }
    log::debug!(
        "storefront enhanced: {} faq items, {} reveal targets",
        rt.page.faq_triggers.len(),
        rt.page.reveal.len()
    );
    Ok(())
}

/// Config from the optional JSON block; defaults when absent or invalid.
fn load_config(document: &Document) -> UiConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_SCRIPT_ID).and_then(|el| el.text_content()) else {
        return UiConfig::default();
    };
    match UiConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            leptos::logging::warn!("ignoring #{CONFIG_SCRIPT_ID}: {err}");
            UiConfig::default()
        }
    }
}

/// Attach a listener for the lifetime of the page.
fn listen(target: &EventTarget, name: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
        .map_err(|err| UiError::dom("addEventListener", &err))?;
    callback.forget();
    Ok(())
}

fn wire_theme(rt: &Rc<Runtime>) -> Result<(), UiError> {
    let Some(toggle) = rt.page.theme_toggle.as_ref() else {
        return Ok(());
    };
    let rt_cb = Rc::clone(rt);
    listen(toggle, "change", move |ev| {
        let checked = rt_cb.page.toggle_checked();
        dispatch(&rt_cb, UiEvent::ThemeToggleChanged { checked }, Some(&ev));
    })
}

fn wire_search(rt: &Rc<Runtime>, document: &Document) -> Result<(), UiError> {
    if let Some(toggle) = rt.page.search_toggle.as_ref() {
        let rt_cb = Rc::clone(rt);
        listen(toggle, "click", move |ev| dispatch(&rt_cb, UiEvent::SearchToggleClicked, Some(&ev)))?;
    }
    for close in &rt.page.search_close {
        let rt_cb = Rc::clone(rt);
        listen(close, "click", move |ev| dispatch(&rt_cb, UiEvent::SearchCloseClicked, Some(&ev)))?;
    }
    let rt_cb = Rc::clone(rt);
    listen(document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        dispatch(&rt_cb, UiEvent::KeyDown { key }, Some(&ev));
    })
}

fn wire_layout(rt: &Rc<Runtime>, window: &Window) -> Result<(), UiError> {
    let rt_cb = Rc::clone(rt);
    listen(window, "load", move |ev| dispatch(&rt_cb, UiEvent::WindowLoaded, Some(&ev)))?;
    let rt_cb = Rc::clone(rt);
    listen(window, "resize", move |ev| dispatch(&rt_cb, UiEvent::WindowResized, Some(&ev)))
}

fn wire_newsletter(rt: &Rc<Runtime>) -> Result<(), UiError> {
    let (Some(form), Some(input)) = (rt.page.newsletter_form.as_ref(), rt.page.newsletter_input.as_ref()) else {
        return Ok(());
    };

    let rt_cb = Rc::clone(rt);
    listen(input, "blur", move |ev| {
        let value = rt_cb.page.newsletter_value();
        dispatch(&rt_cb, UiEvent::NewsletterBlur { value }, Some(&ev));
    })?;

    let rt_cb = Rc::clone(rt);
    listen(input, "input", move |ev| {
        let value = rt_cb.page.newsletter_value();
        dispatch(&rt_cb, UiEvent::NewsletterInput { value }, Some(&ev));
    })?;

    let rt_cb = Rc::clone(rt);
    listen(form, "submit", move |ev| {
        let value = rt_cb.page.newsletter_value();
        dispatch(&rt_cb, UiEvent::NewsletterSubmit { value }, Some(&ev));
    })
}

fn wire_faq(rt: &Rc<Runtime>) -> Result<(), UiError> {
    for (index, trigger) in rt.page.faq_triggers.iter().enumerate() {
        let rt_cb = Rc::clone(rt);
        listen(trigger, "click", move |ev| {
            dispatch(&rt_cb, UiEvent::FaqTriggerClicked { index }, Some(&ev));
        })?;
    }
    Ok(())
}

fn observe_reveals(rt: &Rc<Runtime>, options: &RevealOptions) -> Result<(), UiError> {
    if rt.page.reveal.is_empty() {
        return Ok(());
    }

    let rt_cb = Rc::clone(rt);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    let index = rt_cb.page.reveal_index(&entry.target())?;
                    Some(Intersection { index, is_intersecting: entry.is_intersecting() })
                })
                .collect::<Vec<_>>();
            dispatch(&rt_cb, UiEvent::Intersections(batch), None);
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| UiError::dom("new IntersectionObserver", &err))?;
    callback.forget();

    for el in &rt.page.reveal {
        observer.observe(el);
    }
    *rt.observer.borrow_mut() = Some(observer);
    Ok(())
}
