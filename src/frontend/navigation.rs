use super::{dom, EffectsContext};
use crate::interactions::{viewport_unit, Shortcut};
use crate::rate_limit::{Debounce, Throttle};
use crate::scroll::{nav_is_scrolled, parallax_transform, parse_parallax_speed, SCROLLED_CLASS};
use gloo_timers::callback::Timeout;
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

const NAV_SELECTOR: &str = ".nav-container";
const PARALLAX_SELECTOR: &str = "[data-parallax]";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub(crate) fn setup_nav_marker(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let mut throttle = Throttle::new(context.config.scroll_throttle_ms);
    let window = context.window.clone();
    let context = context.clone();

    dom::listen(&window, "scroll", move |_: Event| {
        if !throttle.ready(dom::now_ms(&context.window)) {
            return;
        }
        let Ok(Some(nav)) = context.document.query_selector(NAV_SELECTOR) else {
            return;
        };

        let scrolled = nav_is_scrolled(
            dom::scroll_offset(&context.window),
            context.config.nav_scrolled_offset,
        );
        let _ = nav.class_list().toggle_with_force(SCROLLED_CLASS, scrolled);
    })
}

pub(crate) fn setup_parallax(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let mut throttle = Throttle::new(context.config.scroll_throttle_ms);
    let window = context.window.clone();
    let context = context.clone();

    dom::listen(&window, "scroll", move |_: Event| {
        if !throttle.ready(dom::now_ms(&context.window)) {
            return;
        }
        let Ok(elements) = dom::query_all(&context.document, PARALLAX_SELECTOR) else {
            return;
        };

        let scrolled = dom::scroll_offset(&context.window);
        for element in elements {
            let speed = parse_parallax_speed(
                element.get_attribute("data-parallax").as_deref(),
                context.config.default_parallax_speed,
            );
            let _ = dom::set_style(&element, "transform", &parallax_transform(scrolled, speed));
        }
    })
}

/// Keeps `--vh` at one percent of the viewport height, settled after resizes.
pub(crate) fn setup_viewport_unit(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    update_viewport_unit(context)?;

    let debounce = Rc::new(RefCell::new(Debounce::new(context.config.resize_debounce_ms)));
    let window = context.window.clone();
    let context = context.clone();

    dom::listen(&window, "resize", move |_: Event| {
        let ticket = debounce.borrow_mut().schedule();
        let wait_ms = debounce.borrow().wait_ms();
        let debounce = debounce.clone();
        let context = context.clone();

        Timeout::new(wait_ms, move || {
            if debounce.borrow().is_latest(ticket) {
                let _ = update_viewport_unit(&context);
            }
        })
        .forget();
    })
}

fn update_viewport_unit(context: &EffectsContext) -> Result<(), JsValue> {
    let Some(root) = context
        .document
        .document_element()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let (_, height) = dom::viewport_size(&context.window);
    root.style().set_property("--vh", &viewport_unit(height))
}

pub(crate) fn setup_shortcuts(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    let document = context.document.clone();

    dom::listen(&context.document, "keydown", move |event: KeyboardEvent| {
        let Some(shortcut) = Shortcut::from_keys(event.ctrl_key() || event.meta_key(), &event.key())
        else {
            return;
        };
        event.prevent_default();

        if let Ok(Some(target)) = document.query_selector(shortcut.target_selector()) {
            if let Some(target) = target.dyn_ref::<HtmlElement>() {
                target.click();
            }
        }
    })
}

pub(crate) fn setup_smooth_anchors(context: &Rc<EffectsContext>) -> Result<(), JsValue> {
    for anchor in dom::query_all(&context.document, ANCHOR_SELECTOR)? {
        let document = context.document.clone();
        let link = anchor.clone();

        dom::listen(&anchor, "click", move |event: MouseEvent| {
            event.prevent_default();

            // A bare "#" is not a valid selector and resolves to nothing.
            let Some(target) = link
                .get_attribute("href")
                .and_then(|href| document.query_selector(&href).ok().flatten())
            else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    Ok(())
}
