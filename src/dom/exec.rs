//! Executes controller actions against the live DOM.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement, HtmlInputElement};

use super::Runtime;
use crate::action::{Action, Defer, Target};
use crate::error::UiError;
use crate::storefront::UiEvent;

/// Feed `event` to the storefront and run whatever it asks for.
pub(crate) fn dispatch(rt: &Rc<Runtime>, event: UiEvent, dom_event: Option<&Event>) {
    log::debug!("ui event: {event:?}");
    let actions = rt.core.borrow_mut().handle(event);
    run(rt, actions, dom_event);
}

/// Run actions in order. A failing action is logged and the rest still run.
pub(crate) fn run(rt: &Rc<Runtime>, actions: Vec<Action>, dom_event: Option<&Event>) {
    for action in actions {
        if let Err(err) = run_one(rt, action, dom_event) {
            leptos::logging::warn!("{err}");
        }
    }
}

fn run_one(rt: &Rc<Runtime>, action: Action, dom_event: Option<&Event>) -> Result<(), UiError> {
    match action {
        Action::SetAttribute { target, name, value } => on(rt, target, |el| {
            el.set_attribute(name, &value)
                .map_err(|err| UiError::dom("setAttribute", &err))
        }),
        Action::RemoveAttribute { target, name } => on(rt, target, |el| {
            el.remove_attribute(name)
                .map_err(|err| UiError::dom("removeAttribute", &err))
        }),
        Action::AddClass { target, class } => on(rt, target, |el| {
            el.class_list()
                .add_1(class)
                .map_err(|err| UiError::dom("classList.add", &err))
        }),
        Action::RemoveClass { target, class } => on(rt, target, |el| {
            el.class_list()
                .remove_1(class)
                .map_err(|err| UiError::dom("classList.remove", &err))
        }),
        Action::SetChecked { target, checked } => on(rt, target, |el| {
            if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
                input.set_checked(checked);
            }
            Ok(())
        }),
        Action::SetSrc { target, src } => on(rt, target, |el| {
            if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
                img.set_src(&src);
                return Ok(());
            }
            el.set_attribute("src", &src)
                .map_err(|err| UiError::dom("setAttribute", &err))
        }),
        Action::SetText { target, text } => on(rt, target, |el| {
            el.set_text_content(Some(&text));
            Ok(())
        }),
        Action::SetStyle { target, property, value } => on(rt, target, |el| {
            let Some(html) = el.dyn_ref::<HtmlElement>() else {
                return Ok(());
            };
            html.style()
                .set_property(property, &value)
                .map_err(|err| UiError::dom("style.setProperty", &err))
        }),
        Action::Focus { target, defer } => {
            let Some(input) = rt.page.element(target).and_then(|el| el.dyn_ref::<HtmlElement>()).cloned() else {
                return Ok(());
            };
            schedule(defer, move || {
                if let Err(err) = input.focus() {
                    leptos::logging::warn!("{}", UiError::dom("focus", &err));
                }
            })
        }
        Action::PreventDefault => {
            if let Some(event) = dom_event {
                event.prevent_default();
            }
            Ok(())
        }
        Action::SyncLayout(defer) => {
            let rt = Rc::clone(rt);
            schedule(defer, move || {
                let metrics = rt.page.measure();
                dispatch(&rt, UiEvent::LayoutMeasured(metrics), None);
            })
        }
        Action::Unobserve(target) => {
            if let (Some(observer), Some(el)) = (rt.observer.borrow().as_ref(), rt.page.element(target)) {
                observer.unobserve(el);
            }
            Ok(())
        }
    }
}

/// Run `f` on the target element; absent elements are skipped.
fn on(rt: &Runtime, target: Target, f: impl FnOnce(&Element) -> Result<(), UiError>) -> Result<(), UiError> {
    match rt.page.element(target) {
        Some(el) => f(el),
        None => Ok(()),
    }
}

fn schedule(defer: Defer, task: impl FnOnce() + 'static) -> Result<(), UiError> {
    match defer {
        Defer::Now => task(),
        Defer::NextTick => {
            Timeout::new(0, task).forget();
        }
        Defer::AfterMs(millis) => {
            Timeout::new(millis, task).forget();
        }
        Defer::NextFrame => {
            let window = web_sys::window().ok_or(UiError::NoWindow)?;
            let callback = Closure::once_into_js(move |_ts: f64| task());
            window
                .request_animation_frame(callback.unchecked_ref())
                .map_err(|err| UiError::dom("requestAnimationFrame", &err))?;
        }
    }
    Ok(())
}
